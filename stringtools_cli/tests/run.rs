mod common;

use stringtools_core::AnyEmptyResult;

#[test]
fn runs_script_steps_in_order() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let script = tmp.path().join("steps.toml");
	std::fs::write(
		&script,
		"[[steps]]\nop = \"sort\"\n\n[[steps]]\nop = \"uppercase\"\n\n[[steps]]\nop = \
		 \"undo\"\n\n[[steps]]\nop = \"dedupe\"\n",
	)?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("run")
		.arg("--script")
		.arg(&script)
		.write_stdin("b\na\nb")
		.assert()
		.success()
		.stdout("a\nb\n");

	Ok(())
}

#[test]
fn script_steps_take_parameters() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let script = tmp.path().join("steps.toml");
	std::fs::write(
		&script,
		"[[steps]]\nop = \"insert\"\ntext = \";\"\nat = \"end\"\n\n[[steps]]\nop = \
		 \"template\"\ntemplate = \"%1 <%2>\"\n",
	)?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("run")
		.arg("-s")
		.arg(&script)
		.write_stdin("Ann;ann@example.com")
		.assert()
		.success()
		.stdout("Ann <ann@example.com>\n");

	Ok(())
}

#[test]
fn unknown_script_op_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let script = tmp.path().join("steps.toml");
	std::fs::write(&script, "[[steps]]\nop = \"explode\"\n")?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("run")
		.arg("--script")
		.arg(&script)
		.write_stdin("text")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("stringtools::script_parse"))
		.stderr(predicates::str::contains("step 1 (`explode`)"));

	Ok(())
}

#[test]
fn failing_step_stops_the_script() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let script = tmp.path().join("steps.toml");
	std::fs::write(
		&script,
		"[[steps]]\nop = \"uppercase\"\n\n[[steps]]\nop = \"bullets\"\nsource = \"* |** \"\ntarget \
		 = \"- \"\n",
	)?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("run")
		.arg("--script")
		.arg(&script)
		.write_stdin("* item")
		.assert()
		.code(2)
		.stdout("")
		.stderr(predicates::str::contains("stringtools::bullet_style_mismatch"));

	Ok(())
}

#[test]
fn missing_script_file_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("run")
		.arg("--script")
		.arg(tmp.path().join("missing.toml"))
		.write_stdin("text")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("stringtools::io_error"));

	Ok(())
}
