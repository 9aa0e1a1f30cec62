mod common;

use stringtools_core::AnyEmptyResult;

#[test]
fn lists_samples() -> AnyEmptyResult {
	common::stringtools_cmd()
		.arg("samples")
		.assert()
		.success()
		.stdout(predicates::str::contains("bullets"))
		.stdout(predicates::str::contains("smart-replace"))
		.stdout(predicates::str::contains("Build links from `name; domain` rows"));

	Ok(())
}

#[test]
fn runs_named_sample() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("samples")
		.arg("bullets")
		.assert()
		.success()
		.stdout(predicates::str::contains("Input:\n* item1\n** sub1\n** sub2"))
		.stdout(predicates::str::contains("Output:\n- item1\n  - sub1\n  - sub2"))
		.stdout(predicates::str::contains("\"op\":\"bullets\""));

	Ok(())
}

#[test]
fn sample_diff() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("samples")
		.arg("smart-replace")
		.arg("--diff")
		.assert()
		.success()
		.stdout(predicates::str::contains("-String userName = DEFAULT_USER_NAME;"))
		.stdout(predicates::str::contains("+String userAddr = DEFAULT_USER_ADDR;"));

	Ok(())
}

#[test]
fn unknown_sample_fails() -> AnyEmptyResult {
	common::stringtools_cmd()
		.arg("samples")
		.arg("nope")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("stringtools::unknown_sample"));

	Ok(())
}
