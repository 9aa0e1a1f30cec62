use crate::LineEdge;
use crate::ToolsError;
use crate::ToolsResult;
use crate::operation::Operation;

/// A ready-made buffer paired with an operation that shows off a transform.
#[derive(Debug, Clone)]
pub struct Sample {
	pub name: &'static str,
	pub description: &'static str,
	pub text: &'static str,
	pub operation: Operation,
}

/// All bundled samples.
pub fn samples() -> Vec<Sample> {
	vec![
		Sample {
			name: "bullets",
			description: "Convert wiki bullets to markdown bullets",
			text: "* item1\n** sub1\n** sub2",
			operation: Operation::Bullets {
				source: "* |** |*** ".to_string(),
				target: "- |  - |    - ".to_string(),
				shift: 0,
			},
		},
		Sample {
			name: "outdent",
			description: "Outdent markdown bullets by one level",
			text: "- item1\n  - sub1\n  - sub2",
			operation: Operation::Bullets {
				source: "- |  - |    - ".to_string(),
				target: "- |  - |    - ".to_string(),
				shift: -1,
			},
		},
		Sample {
			name: "insert",
			description: "Turn plain lines into bullets",
			text: "Bullet1\nBullet2\nBullet3",
			operation: Operation::Insert {
				text: "* ".to_string(),
				at: LineEdge::Beginning,
			},
		},
		Sample {
			name: "template",
			description: "Build links from `name; domain` rows",
			text: "Google; google.com\nYahoo; yahoo.com",
			operation: Operation::Template {
				template: "<a href=\"http://www.%2\">%1</a>".to_string(),
			},
		},
		Sample {
			name: "smart-replace",
			description: "Rename a variable in every spelling",
			text: "\n// Stores user name.\nString userName = DEFAULT_USER_NAME;\n",
			operation: Operation::SmartReplace {
				find: "userName".to_string(),
				replace: "userAddr".to_string(),
			},
		},
	]
}

/// Find a bundled sample by name.
pub fn sample(name: &str) -> ToolsResult<Sample> {
	samples()
		.into_iter()
		.find(|sample| sample.name == name)
		.ok_or_else(|| ToolsError::UnknownSample(name.to_string()))
}
