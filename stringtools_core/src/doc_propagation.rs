//! Copy the doc comment of a private field onto its public accessor.
//!
//! ```text
//! /**
//!  * The user's name.
//!  */
//! private String userName;
//!
//! public String getUserName() {   <- gains a copy of the comment above
//! ```
//!
//! The scan is a single pass over the lines. Comment lines are buffered as
//! they are seen; a private declaration that follows a buffered comment
//! records it under the declared name. A later line that matches the
//! accessor pattern for a recorded name, and is not itself preceded by a
//! comment, gets the recorded comment spliced in above it. Because an
//! accessor that already carries a comment is skipped, running the pass
//! twice gives the same result as running it once.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::ToolsError;
use crate::ToolsResult;
use crate::case::capitalize;
use crate::lines::join_lines;
use crate::lines::split_lines;

/// Turns a private field name into the name used by its accessor.
pub type NamingPolicy = fn(&str) -> String;

/// `userName` → `UserName`, for `getUserName`.
pub fn capitalize_name(name: &str) -> String {
	capitalize(name)
}

/// `_userName` → `userName`, for `get userName`.
pub fn strip_leading_underscore(name: &str) -> String {
	name.strip_prefix('_').unwrap_or(name).to_string()
}

pub fn verbatim_name(name: &str) -> String {
	name.to_string()
}

/// Named [`NamingPolicy`] values, used by configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingStyle {
	#[default]
	Capitalize,
	StripUnderscore,
	Verbatim,
}

impl NamingStyle {
	pub fn policy(self) -> NamingPolicy {
		match self {
			Self::Capitalize => capitalize_name,
			Self::StripUnderscore => strip_leading_underscore,
			Self::Verbatim => verbatim_name,
		}
	}
}

pub const JAVA_PRIVATE_VAR: &str =
	r"^\s*private\s+([A-Za-z0-9<>\[\]_\-]+)\s+([A-Za-z0-9<>\[\]_\-]+)";
pub const JAVA_ACCESSOR_PREFIX: &str = r"^\s*public\s+[A-Za-z0-9<>\[\]_\-]+\s+(get|is)";
pub const ACTIONSCRIPT_PRIVATE_VAR: &str = r"^\s*private\s+(var)\s+([A-Za-z0-9<>\[\]_\-]+)";
pub const ACTIONSCRIPT_ACCESSOR_PREFIX: &str = r"^\s*public\s+function\s+get\s+";
pub const COMMENT_OPEN: &str = r"^\s*/\*+";
pub const COMMENT_CONTINUATION: &str = r"^\s*\*";
pub const COMMENT_CLOSE: &str = r"^\s*\*/";

static JAVA_PRIVATE_VAR_REGEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(JAVA_PRIVATE_VAR).expect("java private var pattern"));
static ACTIONSCRIPT_PRIVATE_VAR_REGEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(ACTIONSCRIPT_PRIVATE_VAR).expect("actionscript private var pattern"));
static COMMENT_OPEN_REGEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(COMMENT_OPEN).expect("comment open pattern"));
static COMMENT_CONTINUATION_REGEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(COMMENT_CONTINUATION).expect("comment continuation pattern"));
static COMMENT_CLOSE_REGEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(COMMENT_CLOSE).expect("comment close pattern"));

/// Everything [`propagate_var_docs`] needs to know about a source dialect.
#[derive(Debug, Clone)]
pub struct DocPropagationRules {
	/// Matches a private field declaration.
	pub private_var: Regex,
	/// Capture group of `private_var` holding the field name.
	pub name_group: usize,
	/// Start of the accessor pattern. The field name, transformed by
	/// `naming`, is appended to it.
	pub accessor_prefix: String,
	pub comment_open: Regex,
	pub comment_continuation: Regex,
	pub comment_close: Regex,
	pub naming: NamingPolicy,
}

impl DocPropagationRules {
	/// Build rules from pattern strings, using the Javadoc comment patterns.
	pub fn new(
		private_var: &str,
		name_group: usize,
		accessor_prefix: &str,
		naming: NamingPolicy,
	) -> ToolsResult<Self> {
		Regex::new(accessor_prefix).map_err(|e| ToolsError::invalid_pattern(accessor_prefix, &e))?;
		let private_var_regex = compile(private_var)?;

		if name_group >= private_var_regex.captures_len() {
			return Err(ToolsError::MissingNameGroup {
				pattern: private_var.to_string(),
				group: name_group,
			});
		}

		Ok(Self {
			private_var: private_var_regex,
			name_group,
			accessor_prefix: accessor_prefix.to_string(),
			comment_open: COMMENT_OPEN_REGEX.clone(),
			comment_continuation: COMMENT_CONTINUATION_REGEX.clone(),
			comment_close: COMMENT_CLOSE_REGEX.clone(),
			naming,
		})
	}

	/// Replace the three comment fragment patterns.
	pub fn with_comment_patterns(
		mut self,
		open: &str,
		continuation: &str,
		close: &str,
	) -> ToolsResult<Self> {
		self.comment_open = compile(open)?;
		self.comment_continuation = compile(continuation)?;
		self.comment_close = compile(close)?;
		Ok(self)
	}

	/// `private Type name;` fields with `getName` / `isName` accessors.
	pub fn java() -> Self {
		Self {
			private_var: JAVA_PRIVATE_VAR_REGEX.clone(),
			name_group: 2,
			accessor_prefix: JAVA_ACCESSOR_PREFIX.to_string(),
			comment_open: COMMENT_OPEN_REGEX.clone(),
			comment_continuation: COMMENT_CONTINUATION_REGEX.clone(),
			comment_close: COMMENT_CLOSE_REGEX.clone(),
			naming: capitalize_name,
		}
	}

	/// `private var _name` fields with `public function get name` accessors.
	pub fn actionscript() -> Self {
		Self {
			private_var: ACTIONSCRIPT_PRIVATE_VAR_REGEX.clone(),
			name_group: 2,
			accessor_prefix: ACTIONSCRIPT_ACCESSOR_PREFIX.to_string(),
			comment_open: COMMENT_OPEN_REGEX.clone(),
			comment_continuation: COMMENT_CONTINUATION_REGEX.clone(),
			comment_close: COMMENT_CLOSE_REGEX.clone(),
			naming: strip_leading_underscore,
		}
	}

	/// Look up a built-in dialect by name.
	pub fn builtin(name: &str) -> Option<Self> {
		match name.to_lowercase().as_str() {
			"java" => Some(Self::java()),
			"actionscript" | "as3" | "flex" => Some(Self::actionscript()),
			_ => None,
		}
	}

	fn is_comment(&self, line: &str) -> bool {
		self.comment_open.is_match(line)
			|| self.comment_continuation.is_match(line)
			|| self.comment_close.is_match(line)
	}

	/// The declared field name, or `None` when the line is not a declaration
	/// or the name group took no part in the match.
	fn declared_name<'a>(&self, line: &'a str) -> Option<&'a str> {
		self.private_var
			.captures(line)
			.and_then(|captures| captures.get(self.name_group))
			.map(|m| m.as_str())
			.filter(|name| !name.is_empty())
	}

	fn accessor_pattern(&self, name: &str) -> ToolsResult<Regex> {
		let pattern = format!("{}{}", self.accessor_prefix, regex::escape(&(self.naming)(name)));
		compile(&pattern)
	}
}

fn compile(pattern: &str) -> ToolsResult<Regex> {
	Regex::new(pattern).map_err(|e| ToolsError::invalid_pattern(pattern, &e))
}

struct RecordedDoc {
	accessor: Regex,
	comment: Vec<String>,
}

/// Copy each private field's doc comment onto its undocumented accessor.
pub fn propagate_var_docs(source: &str, rules: &DocPropagationRules) -> ToolsResult<String> {
	let mut recorded: IndexMap<String, RecordedDoc> = IndexMap::new();
	let mut pending: Vec<&str> = Vec::new();
	let mut output: Vec<String> = Vec::new();
	let mut spliced = 0_usize;

	for line in split_lines(source) {
		// Blank lines between a comment and its declaration keep the comment.
		if line.trim().is_empty() && !pending.is_empty() {
			output.push(line.to_string());
			continue;
		}

		let is_comment = rules.is_comment(line);
		if is_comment {
			pending.push(line);
		}

		let declared = rules.declared_name(line);
		if let Some(name) = declared {
			if !pending.is_empty() {
				let comment = pending.iter().map(ToString::to_string).collect();
				if let Some(entry) = recorded.get_mut(name) {
					entry.comment = comment;
				} else {
					let accessor = rules.accessor_pattern(name)?;
					recorded.insert(name.to_string(), RecordedDoc { accessor, comment });
				}
			}
		}

		if !is_comment && declared.is_none() && pending.is_empty() {
			if let Some(doc) = recorded.values().find(|doc| doc.accessor.is_match(line)) {
				output.extend(doc.comment.iter().cloned());
				spliced += 1;
			}
		}

		if !is_comment {
			pending.clear();
		}

		output.push(line.to_string());
	}

	debug!(fields = recorded.len(), spliced, "propagated field docs");
	Ok(join_lines(&output))
}
