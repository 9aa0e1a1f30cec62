use tracing::debug;

use crate::ToolsError;
use crate::ToolsResult;
use crate::lines::map_lines;

/// An ordered table of bullet markers, one per nesting level.
///
/// Built from a `|`-delimited string such as `"* |** |*** "`. Level `i`
/// nests one deeper than level `i - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletStyles {
	markers: Vec<String>,
}

impl BulletStyles {
	/// Parse a `|`-delimited marker list. Trailing empty markers are dropped,
	/// empty markers elsewhere are kept.
	pub fn parse(styles: &str) -> Self {
		let mut markers: Vec<String> = styles.split('|').map(ToString::to_string).collect();
		while markers.last().is_some_and(String::is_empty) {
			markers.pop();
		}

		Self { markers }
	}

	pub fn len(&self) -> usize {
		self.markers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.markers.is_empty()
	}

	pub fn markers(&self) -> &[String] {
		&self.markers
	}

	/// The deepest level whose marker prefixes `line`.
	fn level_of(&self, line: &str) -> Option<usize> {
		(0..self.markers.len())
			.rev()
			.find(|&level| line.starts_with(self.markers[level].as_str()))
	}
}

/// Convert bullets written in `source` style to `target` style, moving each
/// bullet `shift` levels deeper (positive) or shallower (negative).
///
/// Shifting past the deepest level clamps to it. Shifting above the first
/// level removes the marker entirely. Lines without a known marker are left
/// alone.
pub fn convert_bullet_markup(
	text: &str,
	source: &str,
	target: &str,
	shift: i32,
) -> ToolsResult<String> {
	let source = BulletStyles::parse(source);
	let target = BulletStyles::parse(target);
	convert_bullets(text, &source, &target, shift)
}

/// Same as [`convert_bullet_markup`] with already parsed style tables.
pub fn convert_bullets(
	text: &str,
	source: &BulletStyles,
	target: &BulletStyles,
	shift: i32,
) -> ToolsResult<String> {
	if source.len() != target.len() {
		return Err(ToolsError::BulletStyleMismatch {
			source_len: source.len(),
			target_len: target.len(),
		});
	}

	debug!(levels = source.len(), shift, "converting bullet markup");
	let deepest = source.len() as i64 - 1;

	Ok(map_lines(text, |line| {
		let Some(level) = source.level_of(line) else {
			return line.to_string();
		};

		let rest = &line[source.markers[level].len()..];
		let shifted = (level as i64 + i64::from(shift)).clamp(-1, deepest);
		let marker = usize::try_from(shifted).map_or("", |index| target.markers[index].as_str());

		format!("{marker}{rest}")
	}))
}
