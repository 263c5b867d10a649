// Contract tests for `verstamp manifest` and `verstamp header`

use std::fs;
use tempfile::TempDir;
use assert_cmd::Command;
use predicates::prelude::*;

const MANIFEST: &str = include_str!("fixtures/CMakeLists.txt");
const HEADER: &str = include_str!("fixtures/version.h");

#[test]
fn test_stamp_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("CMakeLists.txt");
    fs::write(&path, MANIFEST).unwrap();

    Command::cargo_bin("verstamp")
        .unwrap()
        .arg("manifest")
        .arg("12.0.7")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("to 12.0.7 (3 line(s) rewritten)"));

    let manifest = fs::read_to_string(&path).unwrap();
    assert!(manifest.contains("set(LEXER_LIB_SOVERSION \"12\""));
    assert!(manifest.contains("  VERSION 12.0.7\n"));
}

#[test]
fn test_stamp_header_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("version.h");
    fs::write(&path, HEADER).unwrap();

    let output = Command::cargo_bin("verstamp")
        .unwrap()
        .arg("header")
        .arg("1.0.0")
        .arg(&path)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["changed"], false);
    assert_eq!(report["lines_rewritten"], 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), HEADER);
}

#[test]
fn test_stamp_rejects_two_part_version() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("version.h");
    fs::write(&path, HEADER).unwrap();

    Command::cargo_bin("verstamp")
        .unwrap()
        .arg("header")
        .arg("1.2")
        .arg(&path)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid version '1.2'"));

    assert_eq!(fs::read_to_string(&path).unwrap(), HEADER);
}

#[test]
fn test_stamp_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("verstamp")
        .unwrap()
        .arg("manifest")
        .arg("1.2.3")
        .arg(temp_dir.path().join("CMakeLists.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot access"));
}
