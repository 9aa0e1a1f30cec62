mod common;

use predicates::prelude::PredicateBooleanExt;
use rstest::rstest;
use stringtools_core::AnyEmptyResult;

#[rstest]
#[case::sort(&["sort"], "pear\napple\nBanana", "Banana\napple\npear\n")]
#[case::sort_ignore_case(&["sort", "--ignore-case"], "pear\napple\nBanana", "apple\nBanana\npear\n")]
#[case::sort_reverse(&["sort", "--reverse"], "pear\napple\nBanana", "pear\napple\nBanana\n")]
#[case::indent(&["indent"], "a\n b", "    a\n     b\n")]
#[case::outdent(&["outdent", "-n", "2"], "    a\n  b\nc", "  a\nb\nc\n")]
#[case::bullets(&["bullets"], "* item1\n** sub1\n** sub2", "- item1\n  - sub1\n  - sub2\n")]
#[case::bullets_shift(
	&["bullets", "--source", "- |  - |    - ", "--target", "- |  - |    - ", "--shift", "-1"],
	"- item1\n  - sub1",
	"item1\n- sub1\n"
)]
#[case::insert(&["insert", "> "], "a\nb", "> a\n> b\n")]
#[case::insert_end(&["insert", "!", "--at", "end"], "a\nb", "a!\nb!\n")]
#[case::trim_defaults_to_beginning(&["trim", "-"], "--a--\n-b", "a--\nb\n")]
#[case::trim_both(&["trim", "-", "--side", "both"], "--a--\n-b", "a\nb\n")]
#[case::trim_end(&["trim", "-", "--side", "end"], "--a--\n-b", "--a\n-b\n")]
#[case::replace(&["replace", r"foo(\d)", "bar$1"], "foo1 foo2", "bar1 bar2\n")]
#[case::smart_replace(
	&["replace", "--smart", "userName", "userAddr"],
	"String userName = DEFAULT_USER_NAME;",
	"String userAddr = DEFAULT_USER_ADDR;\n"
)]
#[case::capitalize(&["capitalize"], "hello\nworld", "Hello\nWorld\n")]
#[case::upper(&["upper"], "Hello", "HELLO\n")]
#[case::lower(&["lower"], "Hello", "hello\n")]
#[case::remove_lines(&["remove-lines", "drop"], "keep\ndrop me\nkeep too", "keep\nkeep too\n")]
#[case::remove_not_matching(&["remove-lines", "--not-matching", "drop"], "keep\ndrop me\nkeep too", "drop me\n")]
#[case::dedupe(&["dedupe"], "a\nb\na\nB", "a\nb\nB\n")]
#[case::dedupe_ignore_case(&["dedupe", "--ignore-case"], "a\nb\na\nB", "a\nb\n")]
#[case::template(
	&["template", "<a href=\"http://www.%2\">%1</a>"],
	"Google; google.com\nYahoo; yahoo.com",
	"<a href=\"http://www.google.com\">Google</a>\n<a href=\"http://www.yahoo.com\">Yahoo</a>\n"
)]
fn transforms_stdin(
	#[case] args: &[&str],
	#[case] input: &str,
	#[case] expected: &str,
) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.args(args)
		.write_stdin(input)
		.assert()
		.success()
		.stdout(expected.to_string());

	Ok(())
}

#[test]
fn reads_input_and_writes_output_files() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("names.txt");
	let output = tmp.path().join("sorted.txt");
	std::fs::write(&input, "charlie\nalpha\nbravo\n")?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("sort")
		.arg("--input")
		.arg(&input)
		.arg("--output")
		.arg(&output)
		.assert()
		.success()
		.stdout("");

	assert_eq!(std::fs::read_to_string(&output)?, "alpha\nbravo\ncharlie");

	Ok(())
}

#[test]
fn diff_prints_changed_lines() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("--diff")
		.arg("upper")
		.write_stdin("same 1\nchange me")
		.assert()
		.success()
		.stdout(predicates::str::contains("-change me"))
		.stdout(predicates::str::contains("+CHANGE ME"))
		.stdout(predicates::str::contains("-same 1"))
		.stdout(predicates::str::starts_with("@@ -1,2 +1,2 @@\n"));

	Ok(())
}

#[test]
fn diff_limits_context_around_changes() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("--diff")
		.arg("replace")
		.arg("zz")
		.arg("ZZ")
		.write_stdin("a1\na2\na3\na4\na5\na6\na7\na8\nzz")
		.assert()
		.success()
		.stdout("@@ -6,4 +6,4 @@\n a6\n a7\n a8\n-zz\n+ZZ\n");

	Ok(())
}

#[test]
fn invalid_regex_leaves_buffer_unchanged() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("replace")
		.arg("[")
		.arg("x")
		.write_stdin("a [b]")
		.assert()
		.success()
		.stdout("a [b]\n")
		.stderr(predicates::str::contains("regex replace skipped"));

	Ok(())
}

#[test]
fn invalid_remove_lines_pattern_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("remove-lines")
		.arg("(")
		.write_stdin("a")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("stringtools::invalid_pattern"));

	Ok(())
}

#[test]
fn mismatched_bullet_styles_fail() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("bullets")
		.arg("--source")
		.arg("* |** ")
		.arg("--target")
		.arg("- ")
		.write_stdin("* item")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("stringtools::bullet_style_mismatch"));

	Ok(())
}

#[test]
fn uuids_ignore_stdin() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let assert = common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("uuids")
		.arg("--count")
		.arg("2")
		.assert()
		.success();

	let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
	let lines: Vec<&str> = stdout.lines().collect();
	assert_eq!(lines.len(), 8);
	assert_eq!(lines[2], "");
	assert_eq!(lines[5], "");
	assert_eq!(lines[0].len(), 36);
	assert_eq!(lines[0], lines[0].to_lowercase());
	assert_eq!(lines[3], lines[3].to_uppercase());
	assert_eq!(lines[6].len(), 32);

	Ok(())
}

#[test]
fn wiki_converts_javadoc() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("wiki")
		.write_stdin(
			"/**\n * Adds two numbers.\n * @param a first\n * @return the sum\n */\npublic int add(int \
			 a, int b) {",
		)
		.assert()
		.success()
		.stdout(
			"<code>public int add(int a, int b)</code>\n:Adds two numbers.\n:<code>a</code> = \
			 first\n:returns the sum\n",
		);

	Ok(())
}

#[test]
fn copy_docs_unknown_dialect_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("copy-docs")
		.arg("--dialect")
		.arg("cobol")
		.write_stdin("private int x;")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("stringtools::unknown_dialect"));

	Ok(())
}

#[test]
fn copy_docs_java() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let source = "/** The user id. */\nprivate int id;\n\npublic int getId() {\n\treturn id;\n}\n";

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("copy-docs")
		.write_stdin(source)
		.assert()
		.success()
		.stdout(
			predicates::str::contains("/** The user id. */\npublic int getId()")
				.and(predicates::str::contains("/** The user id. */\nprivate int id;")),
		);

	Ok(())
}

#[test]
fn regex_info_text() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("regex-info")
		.arg(r"(\w+)@(\w+)")
		.write_stdin("a@b c@d")
		.assert()
		.success()
		.stdout(predicates::str::starts_with("Matches: 2\n  Match: \"a@b\"\n  Group 1: \"a\""));

	Ok(())
}

#[test]
fn regex_info_json() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let assert = common::stringtools_cmd()
		.current_dir(tmp.path())
		.arg("regex-info")
		.arg("--ignore-case")
		.arg("--format")
		.arg("json")
		.arg("(a)|(b)")
		.write_stdin("A")
		.assert()
		.success();

	let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
	assert_eq!(json["matches"][0]["text"], "A");
	assert_eq!(json["matches"][0]["groups"][0], "A");
	assert!(json["matches"][0]["groups"][1].is_null());

	Ok(())
}

#[test]
fn no_subcommand_exits_with_usage_hint() -> AnyEmptyResult {
	common::stringtools_cmd()
		.assert()
		.code(1)
		.stderr(predicates::str::contains("stringtools --help"));

	Ok(())
}
