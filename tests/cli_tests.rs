//! End-to-end tests for the `contentcmp` binary.
//!
//! Exit statuses follow `cmp`: 0 identical, 1 different, 2 trouble.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn contentcmp() -> Command {
    Command::cargo_bin("contentcmp").expect("binary should be built")
}

#[test]
fn test_identical_files_exit_zero() {
    let dir = TempDir::new().expect("create tempdir");
    fs::write(dir.path().join("a"), b"same").expect("write a");
    fs::write(dir.path().join("b"), b"same").expect("write b");

    contentcmp()
        .arg(dir.path().join("a"))
        .arg(dir.path().join("b"))
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_different_files_exit_one() {
    let dir = TempDir::new().expect("create tempdir");
    fs::write(dir.path().join("a"), b"abcd").expect("write a");
    fs::write(dir.path().join("b"), b"abXd").expect("write b");

    contentcmp()
        .arg(dir.path().join("a"))
        .arg(dir.path().join("b"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("differ: byte 3"));
}

#[test]
fn test_size_difference_message() {
    let dir = TempDir::new().expect("create tempdir");
    fs::write(dir.path().join("a"), b"abc").expect("write a");
    fs::write(dir.path().join("b"), b"abcdef").expect("write b");

    contentcmp()
        .arg(dir.path().join("a"))
        .arg(dir.path().join("b"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("differ: size 3 B vs 6 B"));
}

#[test]
fn test_quiet_prints_nothing() {
    let dir = TempDir::new().expect("create tempdir");
    fs::write(dir.path().join("a"), b"one").expect("write a");
    fs::write(dir.path().join("b"), b"two").expect("write b");

    contentcmp()
        .arg("--quiet")
        .arg(dir.path().join("a"))
        .arg(dir.path().join("b"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_file_exit_two() {
    let dir = TempDir::new().expect("create tempdir");
    fs::write(dir.path().join("a"), b"data").expect("write a");

    contentcmp()
        .arg(dir.path().join("a"))
        .arg(dir.path().join("nope"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn test_stdin_side() {
    let dir = TempDir::new().expect("create tempdir");
    fs::write(dir.path().join("a"), b"piped content").expect("write a");

    contentcmp()
        .arg("-")
        .arg(dir.path().join("a"))
        .write_stdin("piped content")
        .assert()
        .code(0);

    contentcmp()
        .arg(dir.path().join("a"))
        .arg("-")
        .write_stdin("piped")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("EOF on - after byte 5"));
}

#[test]
fn test_both_stdin_rejected() {
    contentcmp()
        .args(["-", "-"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Standard input"));
}

#[test]
fn test_missing_argument_is_usage_error() {
    contentcmp().arg("only-one").assert().code(2);
}
