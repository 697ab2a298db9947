//! Integration tests for CLI argument parsing and end-to-end runs.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("toolcheck.toml"), config).unwrap();
    temp
}

const MISSING_TOOL_CONFIG: &str = r#"
[tools]
definitely-not-a-real-tool-xyz = { version = ">=1.0.0" }
"#;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Audit CLI tool versions"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn audit_without_config_fails_with_message() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn audit_missing_tool_fails_in_table_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.current_dir(temp.path());
    cmd.args(["audit", "--no-cache"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Not available"));
    Ok(())
}

#[test]
fn never_fail_forces_exit_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.current_dir(temp.path());
    cmd.args(["audit", "--no-cache", "--never-fail"]);
    cmd.assert().success();
    Ok(())
}

#[test]
fn json_format_exits_zero_even_on_problems() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.current_dir(temp.path());
    cmd.args(["audit", "--no-cache", "--format", "json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("definitely-not-a-real-tool-xyz"));
    Ok(())
}

#[test]
fn read_lists_config_entries() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.current_dir(temp.path());
    cmd.arg("read");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("definitely-not-a-real-tool-xyz"))
        .stdout(predicate::str::contains(">=1.0.0"));
    Ok(())
}

#[test]
fn read_on_empty_dir_reports_no_entries() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.current_dir(temp.path());
    cmd.arg("read");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No tool entries"));
    Ok(())
}

#[test]
fn create_then_read_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();

    let mut create = Command::new(cargo_bin("toolcheck"));
    create.current_dir(temp.path());
    create.args(["create", "jq", "--version", ">=1.6.0", "--schema", "semver"]);
    create
        .assert()
        .success()
        .stdout(predicate::str::contains("Created jq"));

    let mut read = Command::new(cargo_bin("toolcheck"));
    read.current_dir(temp.path());
    read.arg("read");
    read.assert()
        .success()
        .stdout(predicate::str::contains("jq"))
        .stdout(predicate::str::contains(">=1.6.0"));
    Ok(())
}

#[test]
fn create_twice_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();

    let mut first = Command::new(cargo_bin("toolcheck"));
    first.current_dir(temp.path());
    first.args(["create", "jq"]);
    first.assert().success();

    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.current_dir(temp.path());
    cmd.args(["create", "jq"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    Ok(())
}

#[test]
fn update_unknown_tool_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.current_dir(temp.path());
    cmd.args(["update", "ghost", "--version", "1.0.0"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
    Ok(())
}

#[test]
fn delete_removes_entry() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.current_dir(temp.path());
    cmd.args(["delete", "definitely-not-a-real-tool-xyz"]);
    cmd.assert().success();

    let written = fs::read_to_string(temp.path().join("toolcheck.toml")).unwrap();
    assert!(!written.contains("definitely-not-a-real-tool-xyz"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn single_existence_check_of_present_tool() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.args(["single", "sh", "--schema", "existence"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Available"));
    Ok(())
}

#[test]
fn single_missing_tool_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.args(["single", "definitely-not-a-real-tool-xyz", "--version", ">=1.0.0"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Not available"));
    Ok(())
}

#[test]
fn verbose_flag_enables_debug_logging() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.args([
        "--verbose",
        "single",
        "definitely-not-a-real-tool-xyz",
        "--version",
        ">=1.0.0",
    ]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("not found on PATH"));
    Ok(())
}

#[test]
fn debug_logging_is_off_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.args(["single", "definitely-not-a-real-tool-xyz", "--version", ">=1.0.0"]);
    cmd.env_remove("RUST_LOG");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("not found on PATH").not());
    Ok(())
}

#[test]
fn freeze_prints_a_tools_section() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.args(["freeze", "definitely-not-a-real-tool-xyz"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[tools]"));
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("toolcheck"));
    Ok(())
}

#[test]
fn unknown_subcommand_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("toolcheck"));
    cmd.arg("frobnicate");
    cmd.assert().failure();
    Ok(())
}
