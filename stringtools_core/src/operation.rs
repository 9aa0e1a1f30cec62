use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::LineEdge;
use crate::LineFilter;
use crate::SortOrder;
use crate::ToolsConfig;
use crate::ToolsResult;
use crate::TrimSide;
use crate::bullets::convert_bullet_markup;
use crate::case::capitalize_lines;
use crate::case::lowercase;
use crate::case::uppercase;
use crate::doc_propagation::propagate_var_docs;
use crate::indent::add_indent;
use crate::indent::insert_at_line_edge;
use crate::indent::trim_chars;
use crate::line_set::remove_duplicate_lines;
use crate::line_set::remove_lines;
use crate::line_set::sort_lines;
use crate::replace::regex_replace;
use crate::replace::smart_replace;
use crate::template::insert_template_text;
use crate::uuids::DEFAULT_UUID_COUNT;
use crate::uuids::generate_uuids;
use crate::wiki::convert_doc_to_wiki_markup;

/// One transform together with its parameters.
///
/// Operations deserialize from tables tagged by `op`:
///
/// ```toml
/// op = "sort"
/// order = "descending"
/// ignore_case = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
#[non_exhaustive]
pub enum Operation {
	/// Indent every line by `amount` spaces.
	Indent { amount: i32 },
	/// Outdent every line by `amount` spaces.
	Outdent { amount: i32 },
	/// Convert bullet markers between two `|`-separated style tables.
	Bullets {
		source: String,
		target: String,
		#[serde(default)]
		shift: i32,
	},
	/// Insert text at the beginning or end of every line.
	Insert {
		text: String,
		#[serde(default)]
		at: LineEdge,
	},
	/// Strip a set of characters from the ends of every line.
	Trim {
		chars: String,
		#[serde(default)]
		side: TrimSide,
	},
	RegexReplace { find: String, replace: String },
	SmartReplace { find: String, replace: String },
	Capitalize,
	Uppercase,
	Lowercase,
	Sort {
		#[serde(default)]
		order: SortOrder,
		#[serde(default)]
		ignore_case: bool,
	},
	RemoveLines {
		pattern: String,
		#[serde(default)]
		filter: LineFilter,
	},
	Dedupe {
		#[serde(default)]
		ignore_case: bool,
	},
	/// Expand a `%1`, `%2`, ... template once per line of `;`-separated
	/// values.
	Template { template: String },
	/// Replace the buffer with freshly generated UUIDs.
	Uuids {
		#[serde(default = "default_uuid_count")]
		count: usize,
	},
	/// Convert documented `public` declarations to wiki markup.
	Wiki,
	/// Copy private field doc comments onto their accessors.
	CopyDocs { dialect: String },
	/// Empty the buffer.
	Clear,
}

fn default_uuid_count() -> usize {
	DEFAULT_UUID_COUNT
}

impl Operation {
	/// The `op` name used in scripts.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Indent { .. } => "indent",
			Self::Outdent { .. } => "outdent",
			Self::Bullets { .. } => "bullets",
			Self::Insert { .. } => "insert",
			Self::Trim { .. } => "trim",
			Self::RegexReplace { .. } => "regex-replace",
			Self::SmartReplace { .. } => "smart-replace",
			Self::Capitalize => "capitalize",
			Self::Uppercase => "uppercase",
			Self::Lowercase => "lowercase",
			Self::Sort { .. } => "sort",
			Self::RemoveLines { .. } => "remove-lines",
			Self::Dedupe { .. } => "dedupe",
			Self::Template { .. } => "template",
			Self::Uuids { .. } => "uuids",
			Self::Wiki => "wiki",
			Self::CopyDocs { .. } => "copy-docs",
			Self::Clear => "clear",
		}
	}

	/// Whether the result depends on the current buffer at all.
	pub fn reads_buffer(&self) -> bool {
		!matches!(self, Self::Uuids { .. } | Self::Clear)
	}

	/// Apply the operation using only the built-in doc dialects.
	pub fn apply(&self, text: &str) -> ToolsResult<String> {
		self.apply_with(text, &ToolsConfig::default())
	}

	/// Apply the operation, resolving doc dialects through `config`.
	pub fn apply_with(&self, text: &str, config: &ToolsConfig) -> ToolsResult<String> {
		debug!(op = self.name(), bytes = text.len(), "applying operation");

		let result = match self {
			Self::Indent { amount } => add_indent(text, *amount),
			Self::Outdent { amount } => add_indent(text, amount.saturating_neg()),
			Self::Bullets {
				source,
				target,
				shift,
			} => convert_bullet_markup(text, source, target, *shift)?,
			Self::Insert { text: insert, at } => insert_at_line_edge(text, insert, *at),
			Self::Trim { chars, side } => trim_chars(text, chars, *side),
			Self::RegexReplace { find, replace } => regex_replace(text, find, replace),
			Self::SmartReplace { find, replace } => smart_replace(text, find, replace),
			Self::Capitalize => capitalize_lines(text),
			Self::Uppercase => uppercase(text),
			Self::Lowercase => lowercase(text),
			Self::Sort { order, ignore_case } => sort_lines(text, *order, *ignore_case),
			Self::RemoveLines { pattern, filter } => remove_lines(text, pattern, *filter)?,
			Self::Dedupe { ignore_case } => remove_duplicate_lines(text, *ignore_case),
			Self::Template { template } => insert_template_text(template, text),
			Self::Uuids { count } => generate_uuids(*count),
			Self::Wiki => convert_doc_to_wiki_markup(text),
			Self::CopyDocs { dialect } => {
				let rules = config.dialect_rules(dialect)?;
				propagate_var_docs(text, &rules)?
			}
			Self::Clear => String::new(),
		};

		Ok(result)
	}
}
