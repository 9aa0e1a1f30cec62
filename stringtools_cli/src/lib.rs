use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use stringtools_core::LineEdge;
use stringtools_core::LineFilter;
use stringtools_core::Operation;
use stringtools_core::SortOrder;
use stringtools_core::ToolsConfig;
use stringtools_core::TrimSide;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Apply line-oriented text transforms to a buffer.",
	long_about = "stringtools reads a buffer from a file or stdin, applies one transform and \
	              writes the result to stdout or a file.\n\nQuick start:\n  stringtools sort \
	              -i names.txt          Sort lines\n  stringtools bullets -i notes.txt      \
	              Convert wiki bullets to markdown\n  stringtools replace --smart old new   \
	              Rename in every spelling\n  stringtools run --script steps.toml   Run a \
	              sequence of transforms\n  stringtools samples                   List the \
	              bundled samples"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct StringToolsCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Read the buffer from this file instead of stdin.
	#[arg(long, short, global = true)]
	pub input: Option<PathBuf>,

	/// Write the result to this file instead of stdout.
	#[arg(long, short, global = true)]
	pub output: Option<PathBuf>,

	/// Directory searched for `stringtools.toml`.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Print a unified diff of the buffer before and after the transform
	/// instead of the transformed buffer. Each hunk starts with an
	/// `@@ -a,b +c,d @@` header and keeps three lines of context.
	#[arg(long, global = true, default_value_t = false)]
	pub diff: bool,

	/// Enable debug logging on stderr.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Indent every line by a number of spaces.
	Indent {
		/// Spaces to add. Defaults to `indent.width` from the config.
		#[arg(long, short = 'n')]
		amount: Option<i32>,
	},
	/// Remove up to a number of leading spaces from every line.
	Outdent {
		/// Spaces to remove. Defaults to `indent.width` from the config.
		#[arg(long, short = 'n')]
		amount: Option<i32>,
	},
	/// Convert bullet markers from one style table to another.
	///
	/// Style tables are `|`-separated markers ordered from the outermost
	/// nesting level inward, e.g. `"* |** |*** "`. Both tables must have the
	/// same number of levels.
	Bullets {
		/// Source style table. Defaults to `bullets.source` from the config.
		#[arg(long, allow_hyphen_values = true)]
		source: Option<String>,
		/// Target style table. Defaults to `bullets.target` from the config.
		#[arg(long, allow_hyphen_values = true)]
		target: Option<String>,
		/// Levels to move every bullet by. Negative values outdent.
		#[arg(long, default_value_t = 0, allow_hyphen_values = true)]
		shift: i32,
	},
	/// Insert text at the beginning or end of every line.
	Insert {
		/// The text to insert.
		#[arg(allow_hyphen_values = true)]
		text: String,
		/// Which end of the line receives the text.
		#[arg(long, value_enum, default_value_t = EdgeArg::Beginning)]
		at: EdgeArg,
	},
	/// Strip a set of characters from the ends of every line.
	Trim {
		/// Every character in this string is stripped.
		#[arg(allow_hyphen_values = true)]
		chars: String,
		/// Which ends of the line are trimmed.
		#[arg(long, value_enum, default_value_t = SideArg::from(TrimSide::default()))]
		side: SideArg,
	},
	/// Replace every match of a regular expression.
	///
	/// `\n`, `\r` and `\t` typed literally are turned into control
	/// characters. The replacement may reference groups as `$1` or
	/// `${name}`. With `--smart`, `find` is treated as an identifier and
	/// replaced in every common spelling (camelCase, snake_case, UPPER_CASE
	/// and spaced words).
	Replace {
		find: String,
		replace: String,
		#[arg(long, default_value_t = false)]
		smart: bool,
	},
	/// Capitalize the first character of every line.
	Capitalize,
	/// Uppercase the whole buffer.
	Upper,
	/// Lowercase the whole buffer.
	Lower,
	/// Sort lines.
	Sort {
		/// Sort in descending order.
		#[arg(long, default_value_t = false)]
		reverse: bool,
		/// Compare lines ignoring case.
		#[arg(long, default_value_t = false)]
		ignore_case: bool,
	},
	/// Remove lines matching a regular expression.
	RemoveLines {
		pattern: String,
		/// Keep the matching lines and remove the rest.
		#[arg(long, default_value_t = false)]
		not_matching: bool,
	},
	/// Remove repeated lines, keeping the first occurrence.
	Dedupe {
		#[arg(long, default_value_t = false)]
		ignore_case: bool,
	},
	/// Expand a template once per input line.
	///
	/// Each line is split on `;` and `%1`, `%2`, ... in the template are
	/// replaced with the trimmed values.
	Template { template: String },
	/// Print freshly generated UUIDs. Does not read any input.
	Uuids {
		/// Number of UUIDs per block. Defaults to `uuids.count` from the
		/// config.
		#[arg(long, short = 'n')]
		count: Option<usize>,
	},
	/// Convert documented `public` declarations to MediaWiki markup.
	Wiki,
	/// Copy private field doc comments onto their accessors.
	///
	/// Built-in dialects are `java` and `actionscript`. More can be defined
	/// in `stringtools.toml` under `[dialects.NAME]`.
	CopyDocs {
		#[arg(long, default_value = "java")]
		dialect: String,
	},
	/// Report every match of a regular expression and its groups.
	RegexInfo {
		pattern: String,
		/// `.` also matches newlines.
		#[arg(long, default_value_t = false)]
		dot_all: bool,
		/// `^` and `$` match at line boundaries.
		#[arg(long, default_value_t = false)]
		multi_line: bool,
		#[arg(long, default_value_t = false)]
		ignore_case: bool,
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Run a TOML script of transforms against the buffer.
	///
	/// The script holds a `[[steps]]` list. Each step is a table tagged with
	/// `op` (for example `op = "sort"`), or `op = "undo"` to revert the
	/// previous step.
	Run {
		#[arg(long, short)]
		script: PathBuf,
	},
	/// List the bundled samples, or run one by name.
	Samples { name: Option<String> },
	/// Create a sample `stringtools.toml` in the project root.
	Init,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EdgeArg {
	Beginning,
	End,
}

impl From<EdgeArg> for LineEdge {
	fn from(value: EdgeArg) -> Self {
		match value {
			EdgeArg::Beginning => Self::Beginning,
			EdgeArg::End => Self::End,
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SideArg {
	Beginning,
	End,
	Both,
}

impl From<TrimSide> for SideArg {
	fn from(value: TrimSide) -> Self {
		match value {
			TrimSide::Beginning => Self::Beginning,
			TrimSide::End => Self::End,
			TrimSide::Both => Self::Both,
		}
	}
}

impl From<SideArg> for TrimSide {
	fn from(value: SideArg) -> Self {
		match value {
			SideArg::Beginning => Self::Beginning,
			SideArg::End => Self::End,
			SideArg::Both => Self::Both,
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}

impl Commands {
	/// The buffer transform this command runs, with unset flags filled in
	/// from `config`. `None` for commands that are not a single transform.
	pub fn operation(&self, config: &ToolsConfig) -> Option<Operation> {
		let operation = match self {
			Self::Indent { amount } => {
				Operation::Indent {
					amount: amount.unwrap_or(config.indent.width),
				}
			}
			Self::Outdent { amount } => {
				Operation::Outdent {
					amount: amount.unwrap_or(config.indent.width),
				}
			}
			Self::Bullets {
				source,
				target,
				shift,
			} => {
				Operation::Bullets {
					source: source.clone().unwrap_or_else(|| config.bullets.source.clone()),
					target: target.clone().unwrap_or_else(|| config.bullets.target.clone()),
					shift: *shift,
				}
			}
			Self::Insert { text, at } => {
				Operation::Insert {
					text: text.clone(),
					at: (*at).into(),
				}
			}
			Self::Trim { chars, side } => {
				Operation::Trim {
					chars: chars.clone(),
					side: (*side).into(),
				}
			}
			Self::Replace {
				find,
				replace,
				smart: true,
			} => {
				Operation::SmartReplace {
					find: find.clone(),
					replace: replace.clone(),
				}
			}
			Self::Replace { find, replace, .. } => {
				Operation::RegexReplace {
					find: find.clone(),
					replace: replace.clone(),
				}
			}
			Self::Capitalize => Operation::Capitalize,
			Self::Upper => Operation::Uppercase,
			Self::Lower => Operation::Lowercase,
			Self::Sort {
				reverse,
				ignore_case,
			} => {
				Operation::Sort {
					order: if *reverse {
						SortOrder::Descending
					} else {
						SortOrder::Ascending
					},
					ignore_case: *ignore_case || config.lines.ignore_case,
				}
			}
			Self::RemoveLines {
				pattern,
				not_matching,
			} => {
				Operation::RemoveLines {
					pattern: pattern.clone(),
					filter: if *not_matching {
						LineFilter::RemoveNotMatching
					} else {
						LineFilter::RemoveMatching
					},
				}
			}
			Self::Dedupe { ignore_case } => {
				Operation::Dedupe {
					ignore_case: *ignore_case || config.lines.ignore_case,
				}
			}
			Self::Template { template } => {
				Operation::Template {
					template: template.clone(),
				}
			}
			Self::Uuids { count } => {
				Operation::Uuids {
					count: count.unwrap_or(config.uuids.count),
				}
			}
			Self::Wiki => Operation::Wiki,
			Self::CopyDocs { dialect } => {
				Operation::CopyDocs {
					dialect: dialect.clone(),
				}
			}
			Self::RegexInfo { .. } | Self::Run { .. } | Self::Samples { .. } | Self::Init => {
				return None;
			}
		};

		Some(operation)
	}
}
