use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ToolsError {
	#[error(transparent)]
	#[diagnostic(code(stringtools::io_error))]
	Io(#[from] std::io::Error),

	#[error("bullet style tables differ in length: source has {source_len}, target has {target_len}")]
	#[diagnostic(
		code(stringtools::bullet_style_mismatch),
		help("both styles need the same number of `|`-separated levels, e.g. `* |** ` and `- |  - `")
	)]
	BulletStyleMismatch { source_len: usize, target_len: usize },

	#[error("invalid regular expression `{pattern}`: {reason}")]
	#[diagnostic(code(stringtools::invalid_pattern))]
	InvalidPattern { pattern: String, reason: String },

	#[error("pattern `{pattern}` has no capture group {group}")]
	#[diagnostic(
		code(stringtools::missing_name_group),
		help("`name_group` must index a capture group of `private_var`; group 0 is the whole match")
	)]
	MissingNameGroup { pattern: String, group: usize },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(stringtools::config_parse),
		help("check that stringtools.toml is valid TOML with [indent], [bullets], [uuids], [lines] and/or [dialects] sections")
	)]
	ConfigParse(String),

	#[error("failed to parse script: {0}")]
	#[diagnostic(
		code(stringtools::script_parse),
		help("each `[[steps]]` entry needs an `op` key, e.g. `op = \"sort\"` or `op = \"undo\"`")
	)]
	ScriptParse(String),

	#[error("unknown doc dialect: `{0}`")]
	#[diagnostic(
		code(stringtools::unknown_dialect),
		help("built-in dialects: java, actionscript; define more under [dialects] in stringtools.toml")
	)]
	UnknownDialect(String),

	#[error("unknown sample: `{0}`")]
	#[diagnostic(
		code(stringtools::unknown_sample),
		help("run `stringtools samples` to list the available samples")
	)]
	UnknownSample(String),

	#[error("invalid line edge: `{0}`")]
	#[diagnostic(code(stringtools::invalid_line_edge), help("expected `beginning` or `end`"))]
	InvalidLineEdge(String),

	#[error("invalid trim side: `{0}`")]
	#[diagnostic(
		code(stringtools::invalid_trim_side),
		help("expected `beginning`, `end` or `begin + end`")
	)]
	InvalidTrimSide(String),
}

impl ToolsError {
	pub(crate) fn invalid_pattern(pattern: &str, error: &regex::Error) -> Self {
		Self::InvalidPattern {
			pattern: pattern.to_string(),
			reason: error.to_string(),
		}
	}
}

pub type ToolsResult<T> = Result<T, ToolsError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
