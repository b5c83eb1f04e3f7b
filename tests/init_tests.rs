//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::qrstash_cmd;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    qrstash_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized qrstash"));

    assert!(temp.path().join(".qrstash").is_dir());
    assert!(temp.path().join(".qrstash/storage").is_dir());

    let config_path = temp.path().join(".qrstash/config.toml");
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("storage_key = \"qrStore\""));
    assert!(content.contains("created"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    qrstash_cmd().arg("init").arg(temp.path()).assert().success();

    qrstash_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_command_outside_stash_exits_4() {
    let temp = TempDir::new().unwrap();

    qrstash_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Not a qrstash directory"))
        .stderr(predicate::str::contains("qrstash init"));
}

#[test]
fn test_config_get_storage_key() {
    let temp = TempDir::new().unwrap();

    qrstash_cmd().arg("init").arg(temp.path()).assert().success();

    qrstash_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("storage_key")
        .assert()
        .success()
        .stdout(predicate::str::contains("qrStore"));
}

#[test]
fn test_config_set_storage_key() {
    let temp = TempDir::new().unwrap();

    qrstash_cmd().arg("init").arg(temp.path()).assert().success();

    qrstash_cmd()
        .current_dir(temp.path())
        .args(["config", "storage_key", "products"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set storage_key = products"));

    qrstash_cmd()
        .current_dir(temp.path())
        .args(["add", "SKU-1", "data:x"])
        .assert()
        .success();

    assert!(temp.path().join(".qrstash/storage/products").is_file());
}

#[test]
fn test_config_set_invalid_storage_key_fails() {
    let temp = TempDir::new().unwrap();

    qrstash_cmd().arg("init").arg(temp.path()).assert().success();

    qrstash_cmd()
        .current_dir(temp.path())
        .args(["config", "storage_key", "../escape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid storage key"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    qrstash_cmd().arg("init").arg(temp.path()).assert().success();

    qrstash_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("storage_key = qrStore"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_set_created_fails() {
    let temp = TempDir::new().unwrap();

    qrstash_cmd().arg("init").arg(temp.path()).assert().success();

    qrstash_cmd()
        .current_dir(temp.path())
        .args(["config", "created", "2020-01-01T00:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_stash_root_env_var() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    qrstash_cmd().arg("init").arg(temp.path()).assert().success();

    qrstash_cmd()
        .current_dir(elsewhere.path())
        .env("QRSTASH_ROOT", temp.path())
        .args(["add", "via-env", "data:e"])
        .assert()
        .success();

    assert!(temp.path().join(".qrstash/storage/qrStore").is_file());
}
