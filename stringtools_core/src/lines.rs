//! Splitting a buffer into lines and joining them back together.
//!
//! Every transform in this crate goes through [`split_lines`] and
//! [`join_lines`], so the line model is shared:
//!
//! - each `\r` and each `\n` is a separator on its own, which means a `\r\n`
//!   pair yields an extra empty line;
//! - trailing empty lines are dropped;
//! - a buffer without any separator is a single line, even when empty.

/// Split `text` on every `\r` or `\n`.
pub fn split_lines(text: &str) -> Vec<&str> {
	if !text.contains(['\r', '\n']) {
		return vec![text];
	}

	let mut lines: Vec<&str> = text.split(['\r', '\n']).collect();
	while lines.last().is_some_and(|line| line.is_empty()) {
		lines.pop();
	}

	lines
}

/// Join lines with a single `\n`.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
	let capacity = lines.iter().map(|line| line.as_ref().len() + 1).sum();
	let mut result = String::with_capacity(capacity);

	for (index, line) in lines.iter().enumerate() {
		if index > 0 {
			result.push('\n');
		}
		result.push_str(line.as_ref());
	}

	result
}

/// Apply `f` to every line and join the results.
pub(crate) fn map_lines<F>(text: &str, f: F) -> String
where
	F: FnMut(&str) -> String,
{
	let mapped: Vec<String> = split_lines(text).into_iter().map(f).collect();
	join_lines(&mapped)
}
