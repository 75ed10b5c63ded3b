//! End-to-end tests for the `itin` binary.
//!
//! Each test writes a script into a temp directory, points HOME and the
//! config directory at it, and runs the built binary.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn itin_binary() -> String {
    env!("CARGO_BIN_EXE_itin").to_string()
}

fn run_itin(home: &Path, args: &[&str]) -> Output {
    Command::new(itin_binary())
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("ITIN_PRETTY_JSON")
        .env_remove("ITIN_DEFAULT_START_DATE")
        .args(args)
        .output()
        .expect("failed to run itin")
}

const CASCADE_SCRIPT: &str = r#"{
    "start_date": "2025-07-01",
    "operations": [
        {"op": "add_activity", "kind": "ACTIVITY", "name": "A"},
        {"op": "add_activity", "kind": "ACTIVITY", "name": "B"},
        {"op": "add_activity", "kind": "ACTIVITY", "name": "C"},
        {"op": "update_field", "index": 1, "update": {"field": "end_time", "value": "10:45"}},
        {"op": "update_field", "index": 0, "update": {"field": "end_time", "value": "09:30"}},
        {"op": "add_day"},
        {"op": "add_activity", "kind": "TRANSPORT", "name": "Ferry"},
        {"op": "delete_day", "day": "Day 1"}
    ]
}"#;

fn write_script(temp: &TempDir, contents: &str) -> String {
    let path = temp.path().join("script.json");
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().to_string()
}

/// Test that `show` prints the cascaded schedule.
#[test]
fn test_show_prints_cascaded_schedule() {
    let temp = TempDir::new().unwrap();
    // Keep both days, but look at the first one.
    let contents = CASCADE_SCRIPT.replace(r#""op": "delete_day""#, r#""op": "select_day""#);
    let script = write_script(&temp, &contents);

    let output = run_itin(temp.path(), &["show", &script]);
    assert!(
        output.status.success(),
        "itin show should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Day 1 (2025-07-01) [active]"));
    assert!(stdout.contains("1. ACTIVITY  09:00 -09:30* A"));
    assert!(stdout.contains("2. ACTIVITY  09:30 -10:45* B"));
    assert!(stdout.contains("3. ACTIVITY  10:45 -11:45  C"));
    assert!(stdout.contains("Day 2 (2025-07-02)"));
}

/// Test that deleting a day renumbers the survivors in the payload.
#[test]
fn test_payload_after_day_delete() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, CASCADE_SCRIPT);

    let output = run_itin(temp.path(), &["payload", &script]);
    assert!(
        output.status.success(),
        "itin payload should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let days = payload["days"].as_array().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["day"], 1);
    assert_eq!(days[0]["date"], "2025-07-01");
    assert_eq!(days[0]["places"][0]["name"], "Ferry");
    assert_eq!(days[0]["places"][0]["startTime"], "09:00");
}

/// Test that the config file supplies a start date when the script has none.
#[test]
fn test_config_file_start_date() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        r#"{"operations": [{"op": "add_activity", "kind": "STAY"}]}"#,
    );
    let config_path = temp.path().join("itin.toml");
    std::fs::write(&config_path, "default_start_date = \"2024-02-28\"\n").unwrap();

    let output = run_itin(
        temp.path(),
        &[
            "--config",
            &config_path.to_string_lossy(),
            "payload",
            "--compact",
            &script,
        ],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1, "compact payload is one line");
    assert!(stdout.contains(r#""startDate":"2024-02-28""#));
}

/// Test that a missing script fails with a readable error.
#[test]
fn test_missing_script_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.json");

    let output = run_itin(temp.path(), &["show", &missing.to_string_lossy()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read script"));
}
