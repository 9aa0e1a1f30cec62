//! Javadoc to MediaWiki conversion.
//!
//! Pulls every `/** ... */` comment that sits directly above a `public`
//! declaration and rewrites it as a wiki snippet:
//!
//! ```text
//! /**                                  <code>public int add(int a, int b)</code>
//!  * Adds two numbers.          ==>    :Adds two numbers.
//!  * @param a the first one            :<code>a</code> = the first one
//!  */
//! public int add(int a, int b) {
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Group 1 is the comment, group 2 the declaration up to its opening brace.
static DOC_AND_DECLARATION: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"(?sm)(/\*\*.*?\*/)\s*(public\s+[^{]+)").expect("doc declaration pattern")
});
static COMMENT_CLOSE_LINE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"(?m)^\s*\*/").expect("comment close pattern"));
static COMMENT_LINE_MARKER: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"(?m)^\s*\*\s*").expect("comment marker pattern"));
static INLINE_TAG: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\{@\w+\s+([^}]+)\}").expect("inline tag pattern"));
static PARAM_TAG: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"@param\s+([A-Za-z0-9_]+)").expect("param tag pattern"));
static BRACKETED_NAME: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\[([A-Za-z0-9_]+)\]").expect("bracketed name pattern"));

/// Convert every documented `public` declaration in `text` to wiki markup.
///
/// Text outside of matched comments is dropped.
pub fn convert_doc_to_wiki_markup(text: &str) -> String {
	let mut result = String::new();
	let mut converted = 0_usize;

	for captures in DOC_AND_DECLARATION.captures_iter(text) {
		let comment = &captures[1];
		let declaration = captures[2].trim();

		result.push_str("<code>");
		result.push_str(declaration);
		result.push_str("</code>\n");
		result.push_str(&convert_comment_body(comment));
		converted += 1;
	}

	debug!(converted, "converted doc comments to wiki markup");
	result
}

fn convert_comment_body(comment: &str) -> String {
	let body = comment.replace("/**", "");
	let body = COMMENT_CLOSE_LINE.replace_all(&body, "");
	let body = COMMENT_LINE_MARKER.replace_all(&body, ":");
	let body = body.replace("<p/>", "").replace('#', ".");
	let body = INLINE_TAG.replace_all(&body, "<code>${1}</code>");
	let body = PARAM_TAG.replace_all(&body, "<code>${1}</code> =");
	let body = body
		.replace("@return", "returns")
		.replace("@exception", "throws exception:")
		.replace("@throws", "throws exception:");

	BRACKETED_NAME
		.replace_all(&body, "<code>${1}</code>")
		.into_owned()
}
