//! Focused CLI argument parsing tests.
//!
//! Tests that verify command-line argument parsing works correctly.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn version_command_succeeds() {
    Command::cargo_bin("coursework")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("coursework"));
}

#[test]
fn version_flag_shows_version() {
    Command::cargo_bin("coursework")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_flag_shows_usage() {
    Command::cargo_bin("coursework")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("enrollment queries"));
}

#[test]
fn courses_help_shows_options() {
    Command::cargo_bin("coursework")
        .unwrap()
        .args(["courses", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--threshold"))
        .stdout(predicate::str::contains("--keep-last"));
}

#[test]
fn negative_threshold_is_rejected() {
    Command::cargo_bin("coursework")
        .unwrap()
        .args(["courses", "--threshold", "-5"])
        .assert()
        .failure();
}

#[test]
fn malformed_today_is_rejected() {
    Command::cargo_bin("coursework")
        .unwrap()
        .args(["dates", "--today", "05/06/2022"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--today"));
}

#[test]
fn missing_subcommand_fails() {
    Command::cargo_bin("coursework")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
