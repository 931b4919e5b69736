use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn project() -> Result<TempDir> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("types.ts"),
        "export type Props = {};\nexport function f(x: any, props: {}) {}\n",
    )?;
    fs::write(
        temp.path().join("lint-fixes.toml"),
        r#"
[[fix]]
file = "types.ts"
line = 2
category = "explicit_any"

[[fix]]
file = "types.ts"
line = 2
category = "empty_object"

[[fix]]
file = "missing.ts"
line = 1
category = "explicit_any"
"#,
    )?;
    Ok(temp)
}

#[test]
fn test_cli_runs_catalog() -> Result<()> {
    let temp = project()?;

    let mut cmd = Command::cargo_bin("linefix-bin")?;
    cmd.arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("types.ts:2 (explicit_any)"))
        .stdout(predicate::str::contains("File not found:"))
        .stdout(predicate::str::contains("Processed 1 files"))
        .stdout(predicate::str::contains("  - types.ts"));

    assert_eq!(
        fs::read_to_string(temp.path().join("types.ts"))?,
        "export type Props = {};\nexport function f(x: unknown, props: unknown) {}\n"
    );
    Ok(())
}

#[test]
fn test_cli_verbose_goes_to_stderr() -> Result<()> {
    let temp = project()?;

    let mut cmd = Command::cargo_bin("linefix-bin")?;
    cmd.arg("--root")
        .arg(temp.path())
        .arg("--verbose")
        .arg("--dry-run")
        .assert()
        .success()
        .stderr(predicate::str::contains("[VERBOSE] Entries: 3"))
        .stdout(predicate::str::contains("Would rewrite types.ts:2"));

    assert!(fs::read_to_string(temp.path().join("types.ts"))?.contains("x: any"));
    Ok(())
}

#[test]
fn test_cli_json() -> Result<()> {
    let temp = project()?;

    let mut cmd = Command::cargo_bin("linefix-bin")?;
    cmd.arg("--root")
        .arg(temp.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"skipped\""))
        .stdout(predicate::str::contains("Fixing").not());
    Ok(())
}

#[test]
fn test_cli_missing_catalog() -> Result<()> {
    let temp = TempDir::new()?;

    let mut cmd = Command::cargo_bin("linefix-bin")?;
    cmd.arg(temp.path().join("nope.toml"))
        .arg("--root")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
    Ok(())
}

#[test]
fn test_cli_init() -> Result<()> {
    let temp = TempDir::new()?;

    let mut cmd = Command::cargo_bin("linefix-bin")?;
    cmd.current_dir(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .linefix.toml"));

    assert!(temp.path().join(".linefix.toml").exists());
    Ok(())
}
