//! Search and replace engines.
//!
//! Both engines accept the escape sequences a user types into a single line
//! input (`\n`, `\r`, `\t`) and turn them into the real control characters
//! before matching.
//!
//! The infallible entry points ([`regex_replace`], [`smart_replace`]) never
//! fail: a malformed pattern is logged and the buffer comes back untouched
//! (or, for smart replace, as far as it got). The `try_` variants report the
//! error instead.

use once_cell::sync::Lazy;
use regex::Captures;
use regex::Regex;
use tracing::debug;
use tracing::warn;

use crate::ToolsError;
use crate::ToolsResult;
use crate::case::capitalize;
use crate::case::separate_words;

/// Turn literal `\n`, `\r` and `\t` sequences into the characters they name.
pub fn unescape_user_input(text: &str) -> String {
	text.replace("\\n", "\n")
		.replace("\\r", "\r")
		.replace("\\t", "\t")
}

static GROUP_REFERENCE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\$(\$|[0-9]+)").expect("group reference pattern"));

/// Brace every numbered group reference in `replacement` for a regex with
/// `group_count` groups (counting group 0).
///
/// Digits are consumed while they still name an existing group, so `$2_`
/// is group 2 followed by `_`, and with two groups `$12` is group 1
/// followed by `2`. A reference to a group the regex does not have is kept
/// as literal text, and `$$` stays a literal dollar sign.
fn brace_group_references(replacement: &str, group_count: usize) -> String {
	GROUP_REFERENCE
		.replace_all(replacement, |captures: &Captures<'_>| {
			let reference = &captures[1];
			if reference == "$" {
				return "$$".to_string();
			}

			let digits: Vec<usize> = reference.bytes().map(|b| usize::from(b - b'0')).collect();
			let mut group = digits[0];
			if group >= group_count {
				return format!("$${reference}");
			}

			let mut consumed = 1;
			for digit in &digits[1..] {
				let next = group * 10 + digit;
				if next >= group_count {
					break;
				}
				group = next;
				consumed += 1;
			}

			format!("${{{group}}}{}", &reference[consumed..])
		})
		.into_owned()
}

/// Replace every match of `pattern` in `text` with `replacement`.
///
/// `replacement` may reference capture groups as `$1`, `${2}` or `${name}`.
/// A numbered reference ends at the first character that is not a digit,
/// so `$2_$1` swaps two groups around an underscore.
pub fn try_regex_replace(text: &str, pattern: &str, replacement: &str) -> ToolsResult<String> {
	let text = unescape_user_input(text);
	let pattern = unescape_user_input(pattern);
	let replacement = unescape_user_input(replacement);

	let regex = Regex::new(&pattern).map_err(|e| ToolsError::invalid_pattern(&pattern, &e))?;
	let replacement = brace_group_references(&replacement, regex.captures_len());
	Ok(regex.replace_all(&text, replacement.as_str()).into_owned())
}

/// [`try_regex_replace`], returning `text` unchanged when the pattern does not
/// compile.
pub fn regex_replace(text: &str, pattern: &str, replacement: &str) -> String {
	match try_regex_replace(text, pattern, replacement) {
		Ok(replaced) => replaced,
		Err(e) => {
			warn!("regex replace skipped: {e}");
			text.to_string()
		}
	}
}

/// The spellings of a camelCase identifier that smart replace looks for, in
/// the order they are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartVariants {
	/// camelCase, as given.
	pub camel: String,
	/// CamelCase with the first letter capitalized.
	pub capitalized: String,
	/// CAMELCASE.
	pub upper: String,
	/// camelcase.
	pub lower: String,
	/// Camelcase.
	pub lower_capitalized: String,
	/// camel_case.
	pub snake: String,
	/// CAMEL_CASE.
	pub screaming_snake: String,
	/// camel case.
	pub spaced: String,
	/// Camel Case.
	pub spaced_capitalized: String,
	/// Camel case.
	pub spaced_lower_capitalized: String,
}

impl SmartVariants {
	pub fn new(word: &str) -> Self {
		Self {
			camel: word.to_string(),
			capitalized: capitalize(word),
			upper: word.to_uppercase(),
			lower: word.to_lowercase(),
			lower_capitalized: capitalize(&word.to_lowercase()),
			snake: separate_words(word, "_").to_lowercase(),
			screaming_snake: separate_words(word, "_").to_uppercase(),
			spaced: separate_words(word, " ").to_lowercase(),
			spaced_capitalized: separate_words(&capitalize(word), " "),
			spaced_lower_capitalized: capitalize(&separate_words(word, " ").to_lowercase()),
		}
	}

	/// All variants in application order.
	pub fn as_array(&self) -> [&str; 10] {
		[
			self.camel.as_str(),
			self.capitalized.as_str(),
			self.upper.as_str(),
			self.lower.as_str(),
			self.lower_capitalized.as_str(),
			self.snake.as_str(),
			self.screaming_snake.as_str(),
			self.spaced.as_str(),
			self.spaced_capitalized.as_str(),
			self.spaced_lower_capitalized.as_str(),
		]
	}
}

/// Pair up the variants of `find` and `replace` in application order.
pub fn smart_replace_pairs(find: &str, replace: &str) -> Vec<(String, String)> {
	let finds = SmartVariants::new(find);
	let replaces = SmartVariants::new(replace);

	finds
		.as_array()
		.into_iter()
		.zip(replaces.as_array())
		.map(|(find, replace)| (find.to_string(), replace.to_string()))
		.collect()
}

/// Replace `find` with `replace` across its case and separator spellings.
///
/// Given `userName` → `userAddr`, this also rewrites `USER_NAME` to
/// `USER_ADDR`, `user name` to `user addr`, `UserName` to `UserAddr`, and so
/// on. The ten substitutions run one after another over the whole buffer,
/// so a later spelling can match text produced by an earlier one.
///
/// On failure the error carries the pattern that broke and `partial` holds
/// the buffer as transformed up to that point.
pub fn try_smart_replace(text: &str, find: &str, replace: &str) -> Result<String, SmartReplaceError> {
	let mut text = unescape_user_input(text);
	let find = unescape_user_input(find);
	let replace = unescape_user_input(replace);

	if find.is_empty() {
		return Ok(text);
	}

	for (find, replace) in smart_replace_pairs(&find, &replace) {
		let regex = match Regex::new(&find) {
			Ok(regex) => regex,
			Err(e) => {
				return Err(SmartReplaceError {
					error: ToolsError::invalid_pattern(&find, &e),
					partial: text,
				});
			}
		};

		debug!(find = %find, replace = %replace, "smart replace pass");
		let replace = brace_group_references(&replace, regex.captures_len());
		text = regex.replace_all(&text, replace.as_str()).into_owned();
	}

	Ok(text)
}

/// [`try_smart_replace`], returning the partially replaced buffer on error.
pub fn smart_replace(text: &str, find: &str, replace: &str) -> String {
	match try_smart_replace(text, find, replace) {
		Ok(replaced) => replaced,
		Err(e) => {
			warn!("smart replace stopped early: {}", e.error);
			e.partial
		}
	}
}

/// A smart replace that stopped part way through.
#[derive(Debug)]
pub struct SmartReplaceError {
	pub error: ToolsError,
	pub partial: String,
}

impl From<SmartReplaceError> for ToolsError {
	fn from(value: SmartReplaceError) -> Self {
		value.error
	}
}
