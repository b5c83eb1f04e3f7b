//! Integration tests for add, list, delete and clear

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::qrstash_cmd;

fn init_stash() -> TempDir {
    let temp = TempDir::new().unwrap();
    qrstash_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

fn storage_file(temp: &TempDir) -> std::path::PathBuf {
    temp.path().join(".qrstash/storage/qrStore")
}

#[test]
fn test_add_and_list() {
    let temp = init_stash();

    qrstash_cmd()
        .current_dir(temp.path())
        .args(["add", "https://a.example", "data:a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added record #0"));

    qrstash_cmd()
        .current_dir(temp.path())
        .args(["add", "SKU-7", "data:b", "--price", "12.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added record #1"));

    qrstash_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("  0  https://a.example  -  data:a"))
        .stdout(predicate::str::contains("  1  SKU-7  12.50  data:b"));

    let stored = fs::read_to_string(storage_file(&temp)).unwrap();
    assert_eq!(
        stored,
        r#"{"version":1,"qrCodes":[{"identifier":"https://a.example","code":"data:a"},{"identifier":"SKU-7","price":12.5,"code":"data:b"}]}"#
    );
}

#[test]
fn test_add_rejects_non_finite_price() {
    let temp = init_stash();

    for bad in ["inf", "NaN"] {
        qrstash_cmd()
            .current_dir(temp.path())
            .args(["add", "x", "data:x", "--price", bad])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("not a finite price"));
    }

    assert!(!storage_file(&temp).exists());
}

#[test]
fn test_list_empty() {
    let temp = init_stash();

    qrstash_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No QR codes stored"));
}

#[test]
fn test_list_json() {
    let temp = init_stash();

    qrstash_cmd()
        .current_dir(temp.path())
        .args(["add", "a", "data:a"])
        .assert()
        .success();

    let output = qrstash_cmd()
        .current_dir(temp.path())
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["identifier"], "a");
    assert_eq!(parsed[0]["code"], "data:a");
}

#[test]
fn test_delete_shifts_and_out_of_range_is_noop() {
    let temp = init_stash();

    for id in ["A", "B", "C"] {
        qrstash_cmd()
            .current_dir(temp.path())
            .args(["add", id, format!("data:{}", id).as_str()])
            .assert()
            .success();
    }

    qrstash_cmd()
        .current_dir(temp.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted record #1 (B)"));

    let before = fs::read_to_string(storage_file(&temp)).unwrap();

    qrstash_cmd()
        .current_dir(temp.path())
        .args(["delete", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No record at index 5"));

    assert_eq!(fs::read_to_string(storage_file(&temp)).unwrap(), before);

    qrstash_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("  0  A"))
        .stdout(predicate::str::contains("  1  C"))
        .stdout(predicate::str::contains("B").not());
}

#[test]
fn test_clear_removes_storage_file() {
    let temp = init_stash();

    qrstash_cmd()
        .current_dir(temp.path())
        .args(["add", "a", "data:a"])
        .assert()
        .success();
    assert!(storage_file(&temp).exists());

    qrstash_cmd()
        .current_dir(temp.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared all QR codes"));

    assert!(!storage_file(&temp).exists());

    qrstash_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No QR codes stored"));
}

#[test]
fn test_corrupted_storage_exits_3() {
    let temp = init_stash();
    fs::write(storage_file(&temp), "{\"qrCodes\": [").unwrap();

    qrstash_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Malformed storage content"))
        .stderr(predicate::str::contains("qrstash clear"));

    // Clearing discards the unreadable content
    qrstash_cmd()
        .current_dir(temp.path())
        .arg("clear")
        .assert()
        .success();

    assert!(!storage_file(&temp).exists());
}

#[test]
fn test_storage_key_env_override() {
    let temp = init_stash();

    qrstash_cmd()
        .current_dir(temp.path())
        .env("QRSTASH_KEY", "alt")
        .args(["add", "a", "data:a"])
        .assert()
        .success();

    assert!(temp.path().join(".qrstash/storage/alt").is_file());
    assert!(!storage_file(&temp).exists());
}
