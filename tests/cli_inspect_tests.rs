//! End-to-end tests for `keylayout-klc inspect` command.

use std::process::{Command, Output};

mod fixtures;
use fixtures::*;

/// Path to the keylayout-klc binary
fn keylayout_klc_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keylayout-klc")
}

fn inspect(temp_dir: &tempfile::TempDir, args: &[&str]) -> Output {
    Command::new(keylayout_klc_bin())
        .arg("--config")
        .arg(temp_config_path(temp_dir.path()))
        .arg("inspect")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_inspect_human_readable() {
    let (input, temp_dir) = create_temp_keylayout("Circumflex Test.keylayout", CIRCUMFLEX_LAYOUT);

    let output = inspect(&temp_dir, &[input.to_str().unwrap()]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Keyboard: Circumflex Test"));
    assert!(stdout.contains("altshift   keymap 4"));
    assert!(stdout.contains("cmdcaps    (not defined)"));
    assert!(stdout.contains("Dead keys: 1"));
    assert!(stdout.contains("COMBINING CIRCUMFLEX ACCENT (2 compositions)"));
    assert!(stdout.contains("Key rows: 4"));
}

#[test]
fn test_inspect_json() {
    let (input, temp_dir) = create_temp_keylayout("Circumflex Test.keylayout", CIRCUMFLEX_LAYOUT);

    let output = inspect(&temp_dir, &[input.to_str().unwrap(), "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["keyboard_name"], "Circumflex Test");
    assert_eq!(result["layout"]["assignment"]["assignments"]["shift"], 1);
    assert_eq!(result["layout"]["actions"]["dead_keys"]["s1"], "0302");
    assert_eq!(result["layout"]["actions"]["base_keys"]["circ"], "0302");
    assert_eq!(result["layout"]["actions"]["empty_actions"][0], "circ");
    assert_eq!(result["layout"]["compositions"]["0302"][0][0], "0061");
    assert_eq!(result["layout"]["compositions"]["0302"][0][1], "00e2");

    let rows = result["layout"]["rows"].as_array().expect("rows array");
    assert_eq!(rows.len(), 4);
    let circ = rows
        .iter()
        .find(|row| row["virtual_key"] == "OEM_4")
        .expect("OEM_4 row");
    assert_eq!(circ["outputs"]["default"], "0302@");
    assert_eq!(circ["caps"], "0");

    let diagnostics = result["diagnostics"].as_array().expect("diagnostics array");
    assert!(diagnostics
        .iter()
        .any(|d| d["kind"] == "no_source_equivalent" && d["virtual_key"] == "ABNT_C1"));
    assert!(diagnostics.iter().all(|d| d["message"].is_string()));
}

#[test]
fn test_inspect_reports_ligatures() {
    let (input, temp_dir) = create_temp_keylayout("Greek Caps.keylayout", GREEK_CAPS_LAYOUT);

    let output = inspect(&temp_dir, &[input.to_str().unwrap(), "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["diagnostics"][0]["kind"], "ligature_replaced");
    assert_eq!(result["diagnostics"][0]["placeholder"], "007e");
    // The second keymap set is not converted
    assert!(result["layout"]["outputs"]["keys"].get("93").is_none());
}

#[test]
fn test_inspect_shows_source_name() {
    let (input, temp_dir) = create_temp_keylayout("Renamed.keylayout", CIRCUMFLEX_LAYOUT);

    let output = inspect(&temp_dir, &[input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Keyboard: Renamed"));
    assert!(stdout.contains("Source name: Circumflex Test"));

    let output = inspect(&temp_dir, &[input.to_str().unwrap(), "--json"]);
    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["keyboard_name"], "Renamed");
    assert_eq!(result["source_name"], "Circumflex Test");
}

#[test]
fn test_inspect_writes_no_file() {
    let (input, temp_dir) = create_temp_keylayout("Circumflex Test.keylayout", CIRCUMFLEX_LAYOUT);

    let output = inspect(&temp_dir, &[input.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(!temp_dir.path().join("Circumfl.klc").exists());
}

#[test]
fn test_inspect_missing_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("Missing.keylayout");

    let output = inspect(&temp_dir, &[missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
}
