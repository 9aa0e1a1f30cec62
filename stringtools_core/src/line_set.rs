use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::ToolsError;
use crate::ToolsResult;
use crate::lines::join_lines;
use crate::lines::split_lines;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
	#[default]
	Ascending,
	Descending,
}

impl fmt::Display for SortOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Ascending => write!(f, "ascending"),
			Self::Descending => write!(f, "descending"),
		}
	}
}

/// Which lines [`remove_lines`] drops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineFilter {
	/// Drop lines where the pattern matches somewhere.
	#[default]
	RemoveMatching,
	/// Drop lines where the pattern matches nowhere.
	RemoveNotMatching,
}

/// Compare two possibly absent entries.
///
/// Absent entries sort after every line in ascending order and before every
/// line in descending order.
pub fn compare_entries(
	a: Option<&str>,
	b: Option<&str>,
	order: SortOrder,
	ignore_case: bool,
) -> Ordering {
	let ascending = match (a, b) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Greater,
		(Some(_), None) => Ordering::Less,
		(Some(a), Some(b)) if ignore_case => compare_ignore_case(a, b),
		(Some(a), Some(b)) => a.cmp(b),
	};

	match order {
		SortOrder::Ascending => ascending,
		SortOrder::Descending => ascending.reverse(),
	}
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
	a.chars()
		.flat_map(char::to_lowercase)
		.cmp(b.chars().flat_map(char::to_lowercase))
}

/// Sort the lines of `text`. The sort is stable, and surrounding whitespace
/// (including the blank lines that sort to one end) is trimmed off.
pub fn sort_lines(text: &str, order: SortOrder, ignore_case: bool) -> String {
	let mut lines: Vec<Option<&str>> = split_lines(text).into_iter().map(Some).collect();
	lines.sort_by(|a, b| compare_entries(*a, *b, order, ignore_case));

	let lines: Vec<&str> = lines.into_iter().flatten().collect();
	debug!(lines = lines.len(), %order, ignore_case, "sorted lines");
	join_lines(&lines).trim().to_string()
}

/// Drop lines depending on whether `pattern` matches anywhere in them.
pub fn remove_lines(text: &str, pattern: &str, filter: LineFilter) -> ToolsResult<String> {
	let regex = Regex::new(pattern).map_err(|e| ToolsError::invalid_pattern(pattern, &e))?;
	let lines = split_lines(text);
	let total = lines.len();

	let kept: Vec<&str> = lines
		.into_iter()
		.filter(|line| {
			let matches = regex.is_match(line);
			match filter {
				LineFilter::RemoveMatching => !matches,
				LineFilter::RemoveNotMatching => matches,
			}
		})
		.collect();

	debug!(removed = total - kept.len(), "removed lines");
	Ok(join_lines(&kept).trim().to_string())
}

/// Keep the first occurrence of every line, in order.
pub fn remove_duplicate_lines(text: &str, ignore_case: bool) -> String {
	let mut seen: HashSet<String> = HashSet::new();

	let kept: Vec<&str> = split_lines(text)
		.into_iter()
		.filter(|line| {
			let key = if ignore_case {
				line.to_lowercase()
			} else {
				(*line).to_string()
			};
			seen.insert(key)
		})
		.collect();

	join_lines(&kept).trim().to_string()
}
