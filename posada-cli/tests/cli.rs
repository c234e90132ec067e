//! Integration tests for the posada CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, version output, and the basic init and
//! reporting workflow against a temporary data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Build a command with a clean environment pointed at the given data dir.
fn posada(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("posada").expect("Failed to find posada binary");
    cmd.env_remove("POSADA_DATA_DIR")
        .env_remove("POSADA_BUSY_TIMEOUT")
        .env_remove("POSADA_OUTPUT_FORMAT")
        .arg("--data-dir")
        .arg(data_dir.path());
    cmd
}

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("posada").expect("Failed to find posada binary");

    // With clap subcommands required, no arguments should fail and show usage
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("posada").expect("Failed to find posada binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("posada"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag displays help text.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("posada").expect("Failed to find posada binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Manage experience bookings and room occupancy",
        ));
}

/// Test that an invalid subcommand produces an error.
#[test]
fn test_cli_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("posada").expect("Failed to find posada binary");

    cmd.arg("invalid-command");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

/// Test that show-data-dir echoes the overridden data directory.
#[test]
fn test_show_data_dir_with_override() {
    let dir = TempDir::new().expect("tempdir");

    posada(&dir).arg("show-data-dir").assert().success().stdout(
        predicate::str::contains(dir.path().to_str().expect("utf-8 path")),
    );
}

/// Test that reporting commands fail with exit code 3 before init.
#[test]
fn test_reporting_requires_initialized_database() {
    let dir = TempDir::new().expect("tempdir");

    posada(&dir)
        .args(["list-experiences"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Data directory not found"));
}

/// Test that init creates the database file.
#[test]
fn test_init_creates_database() {
    let dir = TempDir::new().expect("tempdir");

    posada(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created database"));

    assert!(dir.path().join("posada.db").exists());
}

/// Test that init is idempotent.
#[test]
fn test_init_twice_reports_existing_database() {
    let dir = TempDir::new().expect("tempdir");

    posada(&dir).arg("init").assert().success();
    posada(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database already exists"));
}

/// Test that init --with-config writes a configuration template.
#[test]
fn test_init_with_config() {
    let dir = TempDir::new().expect("tempdir");

    posada(&dir)
        .args(["init", "--with-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default configuration"));

    assert!(dir.path().join("config.yaml").exists());
}

/// Test that list-experiences on a fresh database prints an empty JSON list.
#[test]
fn test_list_experiences_empty_json() {
    let dir = TempDir::new().expect("tempdir");

    posada(&dir).arg("init").assert().success();

    posada(&dir)
        .args(["list-experiences", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

/// Test that list-experiences table output carries the header row.
#[test]
fn test_list_experiences_table_header() {
    let dir = TempDir::new().expect("tempdir");

    posada(&dir).arg("init").assert().success();

    posada(&dir)
        .arg("list-experiences")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID\tTITLE\tSTART_DATE"));
}

/// Test that occupancy for a missing experience fails with exit code 1.
#[test]
fn test_occupancy_missing_experience() {
    let dir = TempDir::new().expect("tempdir");

    posada(&dir).arg("init").assert().success();

    posada(&dir)
        .args(["occupancy", "42"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

/// Test that reconcile for a missing room type fails with exit code 1.
#[test]
fn test_reconcile_missing_room_type() {
    let dir = TempDir::new().expect("tempdir");

    posada(&dir).arg("init").assert().success();

    posada(&dir)
        .args(["reconcile", "7"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

/// Test that an unknown output format is rejected by argument parsing.
#[test]
fn test_invalid_format_value() {
    let dir = TempDir::new().expect("tempdir");

    posada(&dir).arg("init").assert().success();

    posada(&dir)
        .args(["metrics", "1", "--format", "nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
