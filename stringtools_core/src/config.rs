use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::ToolsError;
use crate::ToolsResult;
use crate::doc_propagation::COMMENT_CLOSE;
use crate::doc_propagation::COMMENT_CONTINUATION;
use crate::doc_propagation::COMMENT_OPEN;
use crate::doc_propagation::DocPropagationRules;
use crate::doc_propagation::NamingStyle;
use crate::uuids::DEFAULT_UUID_COUNT;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"stringtools.toml",
	".stringtools.toml",
	".config/stringtools.toml",
];

/// Default indent width in spaces.
pub const DEFAULT_INDENT_WIDTH: i32 = 4;

/// Default source bullet style (wiki bullets).
pub const DEFAULT_BULLET_SOURCE: &str = "* |** |*** ";

/// Default target bullet style (markdown bullets).
pub const DEFAULT_BULLET_TARGET: &str = "- |  - |    - ";

/// Configuration loaded from a `stringtools.toml` file. Every section is
/// optional; command line flags take precedence over these values.
///
/// ```toml
/// [indent]
/// width = 2
///
/// [bullets]
/// source = "* |** |*** "
/// target = "- |  - |    - "
///
/// [uuids]
/// count = 10
///
/// [lines]
/// ignore_case = true
///
/// [dialects.kotlin]
/// private_var = '^\s*private\s+(va[lr])\s+([A-Za-z0-9_]+)'
/// accessor_prefix = '^\s*fun\s+get'
/// naming = "capitalize"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct ToolsConfig {
	#[serde(default)]
	pub indent: IndentConfig,
	#[serde(default)]
	pub bullets: BulletsConfig,
	#[serde(default)]
	pub uuids: UuidsConfig,
	#[serde(default)]
	pub lines: LinesConfig,
	/// Extra doc propagation dialects, keyed by the name passed to
	/// `copy-docs`. A name here shadows a built-in dialect.
	#[serde(default)]
	pub dialects: BTreeMap<String, DialectConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndentConfig {
	/// Spaces added or removed by `indent` / `outdent`.
	#[serde(default = "default_indent_width")]
	pub width: i32,
}

impl Default for IndentConfig {
	fn default() -> Self {
		Self {
			width: DEFAULT_INDENT_WIDTH,
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulletsConfig {
	#[serde(default = "default_bullet_source")]
	pub source: String,
	#[serde(default = "default_bullet_target")]
	pub target: String,
}

impl Default for BulletsConfig {
	fn default() -> Self {
		Self {
			source: DEFAULT_BULLET_SOURCE.to_string(),
			target: DEFAULT_BULLET_TARGET.to_string(),
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct UuidsConfig {
	#[serde(default = "default_uuid_count")]
	pub count: usize,
}

impl Default for UuidsConfig {
	fn default() -> Self {
		Self {
			count: DEFAULT_UUID_COUNT,
		}
	}
}

/// Defaults for the line-set operations (sort, dedupe).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinesConfig {
	#[serde(default)]
	pub ignore_case: bool,
}

/// A user-defined doc propagation dialect.
#[derive(Debug, Clone, Deserialize)]
pub struct DialectConfig {
	/// Pattern matching a private field declaration.
	pub private_var: String,
	/// Capture group of `private_var` holding the field name.
	#[serde(default = "default_name_group")]
	pub name_group: usize,
	/// Accessor pattern prefix; the transformed field name is appended.
	pub accessor_prefix: String,
	#[serde(default)]
	pub naming: NamingStyle,
	#[serde(default)]
	pub comment_open: Option<String>,
	#[serde(default)]
	pub comment_continuation: Option<String>,
	#[serde(default)]
	pub comment_close: Option<String>,
}

impl DialectConfig {
	/// Compile this dialect into propagation rules.
	pub fn rules(&self) -> ToolsResult<DocPropagationRules> {
		DocPropagationRules::new(
			&self.private_var,
			self.name_group,
			&self.accessor_prefix,
			self.naming.policy(),
		)?
		.with_comment_patterns(
			self.comment_open.as_deref().unwrap_or(COMMENT_OPEN),
			self.comment_continuation
				.as_deref()
				.unwrap_or(COMMENT_CONTINUATION),
			self.comment_close.as_deref().unwrap_or(COMMENT_CLOSE),
		)
	}
}

fn default_indent_width() -> i32 {
	DEFAULT_INDENT_WIDTH
}

fn default_bullet_source() -> String {
	DEFAULT_BULLET_SOURCE.to_string()
}

fn default_bullet_target() -> String {
	DEFAULT_BULLET_TARGET.to_string()
}

fn default_uuid_count() -> usize {
	DEFAULT_UUID_COUNT
}

fn default_name_group() -> usize {
	2
}

impl ToolsConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Parse config from TOML source.
	pub fn parse(content: &str) -> ToolsResult<Self> {
		toml::from_str(content).map_err(|e| ToolsError::ConfigParse(e.to_string()))
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> ToolsResult<Option<Self>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		debug!(path = %config_path.display(), "loading config");
		let content = std::fs::read_to_string(&config_path)?;
		Self::parse(&content).map(Some)
	}

	/// Like [`ToolsConfig::load`], falling back to defaults when no config
	/// file exists.
	pub fn load_or_default(root: &Path) -> ToolsResult<Self> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	/// Propagation rules for `name`, checking configured dialects before the
	/// built-in ones.
	pub fn dialect_rules(&self, name: &str) -> ToolsResult<DocPropagationRules> {
		if let Some(dialect) = self.dialects.get(name) {
			return dialect.rules();
		}

		DocPropagationRules::builtin(name).ok_or_else(|| ToolsError::UnknownDialect(name.to_string()))
	}

	/// Names of every dialect available through this config.
	pub fn dialect_names(&self) -> Vec<String> {
		let mut names: Vec<String> = ["java", "actionscript"]
			.into_iter()
			.map(ToString::to_string)
			.chain(self.dialects.keys().cloned())
			.collect();
		names.sort();
		names.dedup();
		names
	}
}
