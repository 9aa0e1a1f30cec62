use crate::lines::map_lines;

/// Upper-case the first character of `word`, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Capitalize the first character of every line.
pub fn capitalize_lines(text: &str) -> String {
	map_lines(text, capitalize)
}

pub fn uppercase(text: &str) -> String {
	text.to_uppercase()
}

pub fn lowercase(text: &str) -> String {
	text.to_lowercase()
}

/// Insert `separator` before every uppercase character that is not the first
/// character of `word`.
///
/// `separate_words("myUserName", "_")` gives `my_User_Name`. Digits and
/// existing separators are not treated as word boundaries.
pub fn separate_words(word: &str, separator: &str) -> String {
	let mut result = String::with_capacity(word.len() + separator.len() * 4);

	for c in word.chars() {
		if !result.is_empty() && c.is_uppercase() {
			result.push_str(separator);
		}
		result.push(c);
	}

	result
}
