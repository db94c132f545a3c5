//! End-to-end tests for the blockpatch binary.
//!
//! Each test runs the binary inside a scratch directory so the built-in
//! relative path `components/WelcomeScreen.test.tsx` resolves there.

use assert_cmd::Command;
use blockpatch::config::builtin;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_suite(root: &Path, body: &str) -> std::path::PathBuf {
    let components = root.join("components");
    fs::create_dir_all(&components).unwrap();
    let path = components.join("WelcomeScreen.test.tsx");
    fs::write(&path, format!("describe('WelcomeScreen', () => {{\n{body}\n}});\n")).unwrap();
    path
}

fn blockpatch(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("blockpatch").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_patches_builtin_file() {
    let dir = tempdir().unwrap();
    let path = write_suite(dir.path(), builtin::TARGET_BLOCK);

    blockpatch(dir.path())
        .assert()
        .success()
        .stdout("Test updated successfully.\n");

    let patched = fs::read_to_string(&path).unwrap();
    assert!(patched.contains(builtin::REPLACEMENT_BLOCK));
    assert!(!patched.contains(builtin::TARGET_BLOCK));
}

#[test]
fn test_missing_block_still_exits_zero() {
    let dir = tempdir().unwrap();
    let path = write_suite(dir.path(), "  it('renders', () => {});");
    let before = fs::read(&path).unwrap();

    blockpatch(dir.path())
        .assert()
        .success()
        .stdout("Could not find the test block to replace.\n");

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_strict_flag_fails_on_missing_block() {
    let dir = tempdir().unwrap();
    write_suite(dir.path(), "  it('renders', () => {});");

    blockpatch(dir.path())
        .arg("--strict")
        .assert()
        .code(1)
        .stdout("Could not find the test block to replace.\n");
}

#[test]
fn test_second_run_reports_failure() {
    let dir = tempdir().unwrap();
    write_suite(dir.path(), builtin::TARGET_BLOCK);

    blockpatch(dir.path()).assert().success();
    blockpatch(dir.path())
        .assert()
        .success()
        .stdout("Could not find the test block to replace.\n");
}

#[test]
fn test_missing_file_fails_without_status_line() {
    let dir = tempdir().unwrap();

    blockpatch(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("WelcomeScreen.test.tsx"));
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let dir = tempdir().unwrap();
    write_suite(dir.path(), builtin::TARGET_BLOCK);

    blockpatch(dir.path())
        .arg("--verbose")
        .assert()
        .success()
        .stdout("Test updated successfully.\n")
        .stderr(predicate::str::contains("Patched"))
        .stderr(predicate::str::contains("1 occurrence(s) replaced, sha256 "));
}
