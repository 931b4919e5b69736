//! Tests for `linefix init`.
use anyhow::Result;
use linefix::config::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_creates_linefix_toml() -> Result<()> {
    let temp = tempdir()?;
    let mut buffer = Vec::new();

    linefix::commands::run_init_in(temp.path(), &mut buffer)?;

    let config_path = temp.path().join(".linefix.toml");
    assert!(config_path.exists());
    assert!(fs::read_to_string(&config_path)?.contains("[linefix]"));

    let output = String::from_utf8(buffer)?;
    assert!(output.contains("Initialization complete!"));
    Ok(())
}

#[test]
fn test_init_output_is_loadable() -> Result<()> {
    let temp = tempdir()?;
    linefix::commands::run_init_in(temp.path(), &mut Vec::new())?;

    let config = Config::load_from_path(temp.path());
    assert!(config.config_file_path.is_some());
    assert_eq!(config.linefix.param_name.as_deref(), Some("request"));
    assert_eq!(
        config.catalog(),
        Some(temp.path().canonicalize()?.join("lint-fixes.toml"))
    );
    Ok(())
}

#[test]
fn test_init_skips_if_linefix_toml_exists() -> Result<()> {
    let temp = tempdir()?;
    let config_path = temp.path().join(".linefix.toml");
    let original_content = "# custom config";
    fs::write(&config_path, original_content)?;

    let mut buffer = Vec::new();
    linefix::commands::run_init_in(temp.path(), &mut buffer)?;

    assert_eq!(fs::read_to_string(&config_path)?, original_content);
    let output = String::from_utf8(buffer)?;
    assert!(output.contains(".linefix.toml already exists - skipping"));
    Ok(())
}
