//! Integration tests for stowage-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn stowage_cmd() -> Command {
    cargo_bin_cmd!("stowage")
}

#[test]
fn test_version_flag() {
    stowage_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stowage"));
}

#[test]
fn test_help_flag() {
    stowage_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Create and extract"));
}

#[test]
fn test_create_help() {
    stowage_cmd()
        .arg("create")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Create a new archive"));
}

#[test]
fn test_create_and_extract_zip_roundtrip() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let source = temp.path().join("hello.txt");
    fs::write(&source, "hello from the cli").unwrap();
    let archive = temp.path().join("out.zip");

    stowage_cmd()
        .arg("create")
        .arg(&archive)
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation completed successfully"));

    let restored = temp.path().join("restored");
    stowage_cmd()
        .arg("extract")
        .arg(&archive)
        .arg(&restored)
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation completed successfully"));

    assert_eq!(
        fs::read_to_string(restored.join("hello.txt")).unwrap(),
        "hello from the cli"
    );
}

#[test]
fn test_extract_defaults_to_archive_directory() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let source = temp.path().join("inplace.txt");
    fs::write(&source, "in place").unwrap();
    let archive = temp.path().join("out.tar");

    stowage_cmd()
        .arg("create")
        .arg(&archive)
        .arg(&source)
        .assert()
        .success();

    // Extract elsewhere first so the original is distinguishable
    fs::remove_file(&source).unwrap();

    stowage_cmd()
        .arg("extract")
        .arg(&archive)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&source).unwrap(), "in place");
}

#[test]
fn test_unsupported_format_fails_with_diagnostic() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let source = temp.path().join("a.txt");
    fs::write(&source, "x").unwrap();

    stowage_cmd()
        .arg("create")
        .arg(temp.path().join("out.docx"))
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn test_extract_missing_archive_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");

    stowage_cmd()
        .arg("extract")
        .arg(temp.path().join("missing.zip"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.zip"));
}

#[test]
fn test_quiet_suppresses_success_message() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let source = temp.path().join("q.txt");
    fs::write(&source, "quiet").unwrap();

    stowage_cmd()
        .arg("--quiet")
        .arg("create")
        .arg(temp.path().join("out.zip"))
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_json_output_reports_counts() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let source = temp.path().join("j.txt");
    fs::write(&source, "json me").unwrap();

    stowage_cmd()
        .arg("--json")
        .arg("create")
        .arg(temp.path().join("out.zip"))
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"operation\": \"create\""))
        .stdout(predicate::str::contains("\"files_added\": 1"));
}

#[test]
fn test_completions_subcommand() {
    stowage_cmd()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("stowage"));
}
