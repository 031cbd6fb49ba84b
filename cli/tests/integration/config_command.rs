//! Integration tests for `namesync config`.
//!
//! All tests set `NAMESYNC_CONFIG` to a temp path so they never read or
//! write `~/.namesync/config.yaml`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn namesync() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("namesync"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Returns a `TempDir` and the path string for a config file inside it.
fn temp_config_path() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir
        .path()
        .join("config.yaml")
        .to_string_lossy()
        .into_owned();
    (dir, path)
}

// ---------------------------------------------------------------------------
// Subcommand registration
// ---------------------------------------------------------------------------

#[test]
fn test_config_help_shows_show_and_set_subcommands() {
    namesync()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("set"));
}

// ---------------------------------------------------------------------------
// `namesync config show`
// ---------------------------------------------------------------------------

#[test]
fn test_config_show_without_file_uses_defaults() {
    let (_dir, path) = temp_config_path();
    namesync()
        .args(["config", "show"])
        .env("NAMESYNC_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("naming.department:"))
        .stdout(predicate::str::contains("Dev"))
        .stdout(predicate::str::contains("webhook.timeout_secs:"))
        .stdout(predicate::str::contains("10"));
}

#[test]
fn test_config_show_json_has_path_and_config() {
    let (_dir, path) = temp_config_path();
    let output = namesync()
        .args(["config", "show", "--json"])
        .env("NAMESYNC_CONFIG", &path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["path"], path.as_str());
    assert_eq!(v["config"]["naming"]["department"], "Dev");
    assert_eq!(v["config"]["store"]["sudo"], false);
    assert!(v["config"]["webhook"].get("url").is_none());
}

// ---------------------------------------------------------------------------
// `namesync config set`
// ---------------------------------------------------------------------------

#[test]
fn test_config_set_department_persists() {
    let (_dir, path) = temp_config_path();
    namesync()
        .args(["config", "set", "naming.department", "Ops"])
        .env("NAMESYNC_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Set naming.department = Ops"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("department: Ops"), "got: {content}");

    namesync()
        .args(["config", "show"])
        .env("NAMESYNC_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ops"));
}

#[test]
fn test_config_set_keeps_other_values() {
    let (_dir, path) = temp_config_path();
    namesync()
        .args(["config", "set", "store.sudo", "true"])
        .env("NAMESYNC_CONFIG", &path)
        .assert()
        .success();
    namesync()
        .args(["config", "set", "webhook.timeout_secs", "5"])
        .env("NAMESYNC_CONFIG", &path)
        .assert()
        .success();

    let output = namesync()
        .args(["config", "show", "--json"])
        .env("NAMESYNC_CONFIG", &path)
        .output()
        .unwrap();
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["config"]["store"]["sudo"], true);
    assert_eq!(v["config"]["webhook"]["timeout_secs"], 5);
}

#[test]
fn test_config_set_webhook_url_then_clear() {
    let (_dir, path) = temp_config_path();
    namesync()
        .args(["config", "set", "webhook.url", "https://hooks.example.com/abc"])
        .env("NAMESYNC_CONFIG", &path)
        .assert()
        .success();
    assert!(
        std::fs::read_to_string(&path)
            .unwrap()
            .contains("https://hooks.example.com/abc")
    );

    namesync()
        .args(["config", "set", "webhook.url", ""])
        .env("NAMESYNC_CONFIG", &path)
        .assert()
        .success();
    assert!(!std::fs::read_to_string(&path).unwrap().contains("hooks.example.com"));
}

#[cfg(unix)]
#[test]
fn test_config_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, path) = temp_config_path();
    namesync()
        .args(["config", "set", "naming.department", "Ops"])
        .env("NAMESYNC_CONFIG", &path)
        .assert()
        .success();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_config_set_unknown_key_fails() {
    let (_dir, path) = temp_config_path();
    namesync()
        .args(["config", "set", "security.level", "strict"])
        .env("NAMESYNC_CONFIG", &path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown setting: security.level"));
    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn test_config_set_plain_http_webhook_rejected() {
    let (_dir, path) = temp_config_path();
    namesync()
        .args(["config", "set", "webhook.url", "http://hooks.example.com"])
        .env("NAMESYNC_CONFIG", &path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("https://"));
}

#[test]
fn test_config_set_timeout_out_of_range_json_error() {
    let (_dir, path) = temp_config_path();
    let output = namesync()
        .args(["config", "set", "webhook.timeout_secs", "0", "--json"])
        .env("NAMESYNC_CONFIG", &path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["code"], "invalid_config");
}
