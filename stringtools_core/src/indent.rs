use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::ToolsError;
use crate::lines::join_lines;
use crate::lines::map_lines;
use crate::lines::split_lines;

/// Where [`insert_at_line_edge`] puts the inserted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEdge {
	#[default]
	Beginning,
	End,
}

impl FromStr for LineEdge {
	type Err = ToolsError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_lowercase().as_str() {
			"beginning" | "begin" | "start" => Ok(Self::Beginning),
			"end" => Ok(Self::End),
			_ => Err(ToolsError::InvalidLineEdge(value.to_string())),
		}
	}
}

impl fmt::Display for LineEdge {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Beginning => write!(f, "beginning"),
			Self::End => write!(f, "end"),
		}
	}
}

/// Which ends of each line [`trim_chars`] strips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrimSide {
	#[default]
	Beginning,
	End,
	#[serde(alias = "begin + end")]
	Both,
}

impl TrimSide {
	fn trims_start(self) -> bool {
		matches!(self, Self::Beginning | Self::Both)
	}

	fn trims_end(self) -> bool {
		matches!(self, Self::End | Self::Both)
	}
}

impl FromStr for TrimSide {
	type Err = ToolsError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_lowercase().as_str() {
			"beginning" | "begin" | "start" => Ok(Self::Beginning),
			"end" => Ok(Self::End),
			"begin + end" | "both" => Ok(Self::Both),
			_ => Err(ToolsError::InvalidTrimSide(value.to_string())),
		}
	}
}

impl fmt::Display for TrimSide {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Beginning => write!(f, "beginning"),
			Self::End => write!(f, "end"),
			Self::Both => write!(f, "begin + end"),
		}
	}
}

/// Indent every line by `amount` spaces, or outdent when `amount` is
/// negative.
///
/// When outdenting, a line that starts with `|amount|` spaces loses exactly
/// that many characters. Any other line is trimmed of all surrounding
/// whitespace instead, so a ragged block ends up flush left.
pub fn add_indent(text: &str, amount: i32) -> String {
	let width = amount.unsigned_abs() as usize;
	let indent = " ".repeat(width);

	match amount {
		0 => join_lines(&split_lines(text)),
		amount if amount > 0 => map_lines(text, |line| format!("{indent}{line}")),
		_ => {
			map_lines(text, |line| {
				match line.strip_prefix(indent.as_str()) {
					Some(rest) => rest.to_string(),
					None => line.trim().to_string(),
				}
			})
		}
	}
}

/// Prepend or append `insert` to every line, blank lines included.
pub fn insert_at_line_edge(text: &str, insert: &str, edge: LineEdge) -> String {
	map_lines(text, |line| {
		match edge {
			LineEdge::Beginning => format!("{insert}{line}"),
			LineEdge::End => format!("{line}{insert}"),
		}
	})
}

/// Strip any of the characters in `chars` from the chosen ends of every
/// line. An empty buffer or an empty character set leaves the text as is.
pub fn trim_chars(text: &str, chars: &str, side: TrimSide) -> String {
	if text.is_empty() || chars.is_empty() {
		return text.to_string();
	}

	let is_trimmed = |c: char| chars.contains(c);

	map_lines(text, |line| {
		let mut line = line;
		if side.trims_start() {
			line = line.trim_start_matches(is_trimmed);
		}
		if side.trims_end() {
			line = line.trim_end_matches(is_trimmed);
		}
		line.to_string()
	})
}
