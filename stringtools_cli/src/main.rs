use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use stringtools_cli::Commands;
use stringtools_cli::OutputFormat;
use stringtools_cli::StringToolsCli;
use stringtools_core::AnyEmptyResult;
use stringtools_core::Operation;
use stringtools_core::RegexFlags;
use stringtools_core::Script;
use stringtools_core::TextBuffer;
use stringtools_core::ToolsConfig;
use stringtools_core::ToolsError;
use stringtools_core::regex_info::regex_report;
use stringtools_core::samples;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

const SAMPLE_CONFIG: &str = "# stringtools configuration\n# Command line flags take precedence \
                             over these values.\n\n[indent]\nwidth = 4\n\n[bullets]\nsource = \
                             \"* |** |*** \"\ntarget = \"- |  - |    - \"\n\n[uuids]\ncount = \
                             5\n\n[lines]\nignore_case = false\n\n# Extra dialects for \
                             `stringtools copy-docs --dialect NAME`.\n# \
                             [dialects.kotlin]\n# private_var = \
                             '^\\s*private\\s+(va[lr])\\s+([A-Za-z0-9_]+)'\n# accessor_prefix = \
                             '^\\s*(?:public\\s+)?fun\\s+get'\n# naming = \"capitalize\"\n";

fn main() {
	let args = StringToolsCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_logging(args.verbose, use_color);

	let result = match &args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Samples { name }) => run_samples(&args, name.as_deref()),
		Some(Commands::Run { script }) => run_script(&args, script),
		Some(Commands::RegexInfo {
			pattern,
			dot_all,
			multi_line,
			ignore_case,
			format,
		}) => {
			let flags = RegexFlags {
				dot_all: *dot_all,
				multi_line: *multi_line,
				ignore_case: *ignore_case,
			};
			run_regex_info(&args, pattern, flags, *format)
		}
		Some(command) => run_command(&args, command),
		None => {
			eprintln!("No subcommand specified. Run `stringtools --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<ToolsError>() {
			Ok(tools_err) => {
				let report: miette::Report = (*tools_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.without_time()
		.init();
}

fn resolve_root(args: &StringToolsCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_config(args: &StringToolsCli) -> Result<ToolsConfig, ToolsError> {
	ToolsConfig::load_or_default(&resolve_root(args))
}

fn read_input(args: &StringToolsCli) -> Result<String, ToolsError> {
	match &args.input {
		Some(path) => Ok(std::fs::read_to_string(path)?),
		None => {
			let mut text = String::new();
			std::io::stdin().read_to_string(&mut text)?;
			Ok(text)
		}
	}
}

fn run_command(args: &StringToolsCli, command: &Commands) -> AnyEmptyResult {
	let config = load_config(args)?;
	let Some(operation) = command.operation(&config) else {
		return Ok(());
	};

	let before = if operation.reads_buffer() {
		read_input(args)?
	} else {
		String::new()
	};

	let mut buffer = TextBuffer::new(before.clone());
	buffer.apply(&operation, &config)?;
	emit(args, &before, buffer.text())
}

fn run_script(args: &StringToolsCli, script_path: &Path) -> AnyEmptyResult {
	let config = load_config(args)?;
	let content = std::fs::read_to_string(script_path).map_err(ToolsError::from)?;
	let script = Script::parse(&content)?;
	let before = read_input(args)?;

	let mut buffer = TextBuffer::new(before.clone());
	script.run(&mut buffer, &config)?;
	emit(args, &before, buffer.text())
}

fn run_regex_info(
	args: &StringToolsCli,
	pattern: &str,
	flags: RegexFlags,
	format: OutputFormat,
) -> AnyEmptyResult {
	let text = read_input(args)?;
	let report = regex_report(&text, pattern, flags)?;

	let rendered = match format {
		OutputFormat::Text => report.to_string(),
		OutputFormat::Json => serde_json::to_string_pretty(&report)?,
	};

	write_output(args, &rendered)
}

fn run_samples(args: &StringToolsCli, name: Option<&str>) -> AnyEmptyResult {
	let Some(name) = name else {
		for sample in samples::samples() {
			println!("{:<16} {}", colored!(sample.name, bold), sample.description);
		}
		return Ok(());
	};

	let sample = samples::sample(name)?;
	let config = load_config(args)?;
	let after = sample.operation.apply_with(sample.text, &config)?;

	println!("{}", colored!(sample.description, bold));
	println!("{}", describe_operation(&sample.operation)?);
	println!();
	if args.diff {
		print_diff(sample.text, &after);
	} else {
		println!("{}", colored!("Input:", bold));
		println!("{}", sample.text);
		println!("{}", colored!("Output:", bold));
		println!("{after}");
	}

	Ok(())
}

fn describe_operation(operation: &Operation) -> Result<String, serde_json::Error> {
	serde_json::to_string(operation)
}

fn run_init(args: &StringToolsCli) -> AnyEmptyResult {
	let root = resolve_root(args);
	let config_path = root.join("stringtools.toml");

	if let Some(existing) = ToolsConfig::resolve_path(&root) {
		println!("Config file already exists: {}", existing.display());
		return Ok(());
	}

	std::fs::write(&config_path, SAMPLE_CONFIG)?;
	println!("Created {}", config_path.display());

	Ok(())
}

/// Write the transformed buffer, or the diff against the original when
/// `--diff` is set. With `--output` the buffer always lands in the file.
fn emit(args: &StringToolsCli, before: &str, after: &str) -> AnyEmptyResult {
	if !args.diff {
		return write_output(args, after);
	}

	if let Some(path) = &args.output {
		std::fs::write(path, after)?;
	}
	print_diff(before, after);

	Ok(())
}

fn write_output(args: &StringToolsCli, text: &str) -> AnyEmptyResult {
	match &args.output {
		Some(path) => std::fs::write(path, text)?,
		None if text.is_empty() || text.ends_with('\n') => print!("{text}"),
		None => println!("{text}"),
	}

	Ok(())
}

/// Print a unified diff between two strings, colorized.
/// Print the changed hunks between two buffers with three lines of context.
fn print_diff(before: &str, after: &str) {
	let diff = TextDiff::from_lines(before, after);
	let mut unified = diff.unified_diff();
	unified.context_radius(3);

	for hunk in unified.iter_hunks() {
		println!("{}", colored!(hunk.header().to_string(), bold));
		for change in hunk.iter_changes() {
			let line = change.to_string_lossy();
			let line = line.trim_end_matches(['\r', '\n']);
			match change.tag() {
				ChangeTag::Delete => println!("{}", colored!(format!("-{line}"), red)),
				ChangeTag::Insert => println!("{}", colored!(format!("+{line}"), green)),
				ChangeTag::Equal => println!(" {line}"),
			}
		}
	}
}
