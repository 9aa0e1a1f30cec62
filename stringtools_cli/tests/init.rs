mod common;

use stringtools_core::AnyEmptyResult;
use stringtools_core::ToolsConfig;

#[test]
fn can_init() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::stringtools_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Created"));

	let config_path = tmp.path().join("stringtools.toml");
	let content = std::fs::read_to_string(&config_path)?;
	assert!(content.contains("[indent]"));
	assert!(content.contains("[bullets]"));
	assert!(content.contains("[dialects.kotlin]"));

	Ok(())
}

#[test]
fn init_creates_valid_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::stringtools_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let config = ToolsConfig::load(tmp.path())?.ok_or("config should exist")?;
	assert_eq!(config.indent.width, 4);
	assert_eq!(config.uuids.count, 5);
	assert!(config.dialects.is_empty());

	Ok(())
}

#[test]
fn init_does_not_overwrite() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config_dir = tmp.path().join(".config");
	std::fs::create_dir_all(&config_dir)?;
	let config_path = config_dir.join("stringtools.toml");
	std::fs::write(&config_path, "# existing config\n")?;

	common::stringtools_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already exists"));

	assert_eq!(std::fs::read_to_string(&config_path)?, "# existing config\n");
	assert!(!tmp.path().join("stringtools.toml").exists());

	Ok(())
}
