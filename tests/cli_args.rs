//! Tests for the binary's command-line surface.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn counterdash_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_counterdash"))
}

#[test]
fn help_lists_overrides() {
    let output = counterdash_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--title"));
    assert!(stdout.contains("--url"));
    assert!(stdout.contains("--field"));
}

#[test]
fn version_flag_prints_package_version() {
    let output = counterdash_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[reading]\nurl = \"not-a-url\"\n").unwrap();

    let output = counterdash_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"));
}

#[test]
fn invalid_url_flag_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = counterdash_cmd()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .arg("--url")
        .arg("")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reading.url must not be empty"));
}
