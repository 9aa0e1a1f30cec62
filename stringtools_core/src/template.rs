use crate::lines::join_lines;
use crate::lines::split_lines;

/// Expand `template` once per non-blank line of `text`.
///
/// Each line is a `;`-separated parameter list. `%1` in the template is
/// replaced by the first parameter, `%2` by the second, and so on. A leading
/// or trailing `;` produces an empty first or last parameter, so
/// `;Johnson` fills `%1` with nothing and `%2` with `Johnson`.
///
/// ```
/// use stringtools_core::template::insert_template_text;
///
/// let rows = "google; google.com\nyahoo; yahoo.com";
/// assert_eq!(
/// 	insert_template_text("%1 = www.%2", rows),
/// 	"google = www.google.com\nyahoo = www.yahoo.com"
/// );
/// ```
pub fn insert_template_text(template: &str, text: &str) -> String {
	if template.is_empty() || text.is_empty() {
		return text.to_string();
	}

	let expanded: Vec<String> = split_lines(text)
		.into_iter()
		.filter(|line| !line.trim().is_empty())
		.map(|line| expand_line(template, line))
		.collect();

	join_lines(&expanded)
}

fn expand_line(template: &str, line: &str) -> String {
	let mut padded = String::with_capacity(line.len() + 2);
	if line.starts_with(';') {
		padded.push(' ');
	}
	padded.push_str(line);
	if line.ends_with(';') {
		padded.push(' ');
	}

	let mut result = template.to_string();
	for (index, param) in padded.split(';').enumerate() {
		let placeholder = format!("%{}", index + 1);
		result = result.replace(&placeholder, param.trim());
	}

	result
}
