//! End-to-end tests for `keylayout-klc config` commands.

use std::path::Path;
use std::process::{Command, Output};

mod fixtures;
use fixtures::*;
use keylayout_klc::config::Config;
use tempfile::TempDir;

/// Path to the keylayout-klc binary
fn keylayout_klc_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keylayout-klc")
}

fn config_command(config_path: &Path, args: &[&str]) -> Output {
    Command::new(keylayout_klc_bin())
        .arg("--config")
        .arg(config_path)
        .arg("config")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_config_show_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_config_path(temp_dir.path());

    let output = config_command(&config_path, &["show"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("myCompany"));
    assert!(stdout.contains("0409"));
    assert!(!config_path.exists(), "show must not create the file");
}

#[test]
fn test_config_show_json() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_config_path(temp_dir.path());

    let output = config_command(&config_path, &["show", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["metadata"]["locale_name"], "en-US");
    assert_eq!(result["output"]["placeholder"], "007e");
}

#[test]
fn test_config_set_and_reload() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_config_path(temp_dir.path());

    let output = config_command(
        &config_path,
        &["set", "--company", "Type Foundry", "--locale-id", "040C"],
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config.metadata.company, "Type Foundry");
    assert_eq!(config.metadata.locale_id, "040c");
    assert_eq!(config.metadata.locale_name, "en-US");
}

#[test]
fn test_config_set_requires_an_option() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_config_path(temp_dir.path());

    let output = config_command(&config_path, &["set"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!config_path.exists());
}

#[test]
fn test_config_set_rejects_invalid_locale_id() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_config_path(temp_dir.path());

    let output = config_command(&config_path, &["set", "--locale-id", "12"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("locale_id"));
    assert!(!config_path.exists());
}

#[test]
fn test_broken_config_file_fails_convert() {
    let (input, temp_dir) = create_temp_keylayout("German.keylayout", CIRCUMFLEX_LAYOUT);
    let config_path = temp_config_path(temp_dir.path());
    std::fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    std::fs::write(&config_path, "[metadata\n").unwrap();

    let output = Command::new(keylayout_klc_bin())
        .arg("--config")
        .arg(&config_path)
        .args(["convert", input.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("German.klc").exists());
}
