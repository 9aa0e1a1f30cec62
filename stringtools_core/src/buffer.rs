use serde::Deserialize;
use tracing::debug;

use crate::ToolsConfig;
use crate::ToolsError;
use crate::ToolsResult;
use crate::operation::Operation;

/// The edit buffer: the current text plus every earlier version of it.
///
/// Each mutation pushes the previous text onto an unbounded stack, and
/// [`TextBuffer::undo`] pops it back. A failed operation leaves both the text
/// and the history untouched.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
	text: String,
	history: Vec<String>,
}

impl TextBuffer {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			history: Vec::new(),
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn into_text(self) -> String {
		self.text
	}

	/// Number of snapshots available to [`TextBuffer::undo`].
	pub fn history_len(&self) -> usize {
		self.history.len()
	}

	pub fn can_undo(&self) -> bool {
		!self.history.is_empty()
	}

	/// Replace the text, remembering the old one.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let previous = std::mem::replace(&mut self.text, text.into());
		self.history.push(previous);
	}

	pub fn clear(&mut self) {
		self.set_text(String::new());
	}

	/// Run `operation` against the current text.
	pub fn apply(&mut self, operation: &Operation, config: &ToolsConfig) -> ToolsResult<()> {
		let result = operation.apply_with(&self.text, config)?;
		self.set_text(result);
		Ok(())
	}

	/// Restore the previous text. Returns `false` when there is nothing to
	/// undo.
	pub fn undo(&mut self) -> bool {
		let Some(previous) = self.history.pop() else {
			return false;
		};

		self.text = previous;
		true
	}
}

/// A sequence of operations to run against one buffer.
///
/// ```toml
/// [[steps]]
/// op = "sort"
/// ignore_case = true
///
/// [[steps]]
/// op = "undo"
///
/// [[steps]]
/// op = "dedupe"
/// ```
#[derive(Debug, Clone, Default)]
pub struct Script {
	pub steps: Vec<Step>,
}

/// One script step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
	/// `op = "undo"`
	Undo,
	Apply(Operation),
}

impl Step {
	/// Read the step at 1-based `position`. Errors name the step and its `op`.
	fn from_table(position: usize, table: toml::Table) -> ToolsResult<Self> {
		let op = match table.get("op") {
			Some(toml::Value::String(op)) => op.clone(),
			Some(_) => {
				return Err(ToolsError::ScriptParse(format!(
					"step {position}: `op` must be a string"
				)));
			}
			None => {
				return Err(ToolsError::ScriptParse(format!(
					"step {position}: missing `op` key"
				)));
			}
		};

		if op == "undo" {
			return Ok(Self::Undo);
		}

		toml::Value::Table(table)
			.try_into::<Operation>()
			.map(Self::Apply)
			.map_err(|e| ToolsError::ScriptParse(format!("step {position} (`{op}`): {e}")))
	}
}

#[derive(Deserialize)]
struct RawScript {
	#[serde(default)]
	steps: Vec<toml::Table>,
}

impl Script {
	pub fn parse(content: &str) -> ToolsResult<Self> {
		let raw: RawScript =
			toml::from_str(content).map_err(|e| ToolsError::ScriptParse(e.to_string()))?;
		let steps = raw
			.steps
			.into_iter()
			.enumerate()
			.map(|(index, table)| Step::from_table(index + 1, table))
			.collect::<ToolsResult<Vec<_>>>()?;

		Ok(Self { steps })
	}

	/// Run every step in order. Stops at the first failing step; the steps
	/// before it stay applied.
	pub fn run(&self, buffer: &mut TextBuffer, config: &ToolsConfig) -> ToolsResult<()> {
		for (index, step) in self.steps.iter().enumerate() {
			match step {
				Step::Undo => {
					let undone = buffer.undo();
					debug!(step = index, undone, "undo");
				}
				Step::Apply(operation) => buffer.apply(operation, config)?,
			}
		}

		Ok(())
	}
}
