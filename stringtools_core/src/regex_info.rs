use std::fmt;

use regex::RegexBuilder;
use serde::Deserialize;
use serde::Serialize;

use crate::ToolsError;
use crate::ToolsResult;

/// Matching flags for [`regex_report`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegexFlags {
	/// `.` also matches `\n`.
	pub dot_all: bool,
	/// `^` and `$` match at line boundaries.
	pub multi_line: bool,
	pub ignore_case: bool,
}

/// One match of a pattern and its numbered capture groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegexMatch {
	/// The whole match (group 0).
	pub text: String,
	/// Groups 1.. in pattern order. `None` for a group that did not take
	/// part in the match.
	pub groups: Vec<Option<String>>,
}

/// Every match of a pattern in a buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegexMatchReport {
	pub matches: Vec<RegexMatch>,
}

impl RegexMatchReport {
	pub fn len(&self) -> usize {
		self.matches.len()
	}

	pub fn is_empty(&self) -> bool {
		self.matches.is_empty()
	}
}

/// One `Match:` block per match, each followed by a blank line.
///
/// A group that took no part in the match is written as a bare `null`
/// without quotes; a group that captured the text `null` prints `"null"`.
impl fmt::Display for RegexMatchReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Matches: {}", self.matches.len())?;

		for found in &self.matches {
			writeln!(f, "  Match: \"{}\"", found.text)?;
			for (index, group) in found.groups.iter().enumerate() {
				match group {
					Some(group) => writeln!(f, "  Group {}: \"{group}\"", index + 1)?,
					None => writeln!(f, "  Group {}: null", index + 1)?,
				}
			}
			writeln!(f)?;
		}

		Ok(())
	}
}

/// Collect every match of `pattern` in `text`.
pub fn regex_report(text: &str, pattern: &str, flags: RegexFlags) -> ToolsResult<RegexMatchReport> {
	let regex = RegexBuilder::new(pattern)
		.dot_matches_new_line(flags.dot_all)
		.multi_line(flags.multi_line)
		.case_insensitive(flags.ignore_case)
		.build()
		.map_err(|e| ToolsError::invalid_pattern(pattern, &e))?;

	let matches = regex
		.captures_iter(text)
		.map(|captures| {
			RegexMatch {
				text: captures[0].to_string(),
				groups: captures
					.iter()
					.skip(1)
					.map(|group| group.map(|m| m.as_str().to_string()))
					.collect(),
			}
		})
		.collect();

	Ok(RegexMatchReport { matches })
}

/// The rendered [`RegexMatchReport`], or an empty string when either input is
/// empty or the pattern does not compile.
pub fn regex_info(text: &str, pattern: &str, flags: RegexFlags) -> String {
	if text.is_empty() || pattern.is_empty() {
		return String::new();
	}

	regex_report(text, pattern, flags)
		.map(|report| report.to_string())
		.unwrap_or_default()
}
