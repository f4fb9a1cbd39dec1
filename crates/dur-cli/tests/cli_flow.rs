//! End-to-end tests running the `dur` binary.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn dur_binary() -> String {
    env!("CARGO_BIN_EXE_dur").to_string()
}

/// Runs `dur` with an isolated home so no user config leaks in.
fn run_dur(home: &Path, args: &[&str]) -> Output {
    run_dur_with_env(home, &[], args)
}

/// Like `run_dur`, with extra `DUR_*` variables set after isolation.
fn run_dur_with_env(home: &Path, envs: &[(&str, &str)], args: &[&str]) -> Output {
    Command::new(dur_binary())
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("DUR_FORMAT_STYLE")
        .env_remove("DUR_JSON")
        .envs(envs.iter().copied())
        .args(args)
        .output()
        .expect("failed to run dur")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_parse_valid_inputs() {
    let temp = TempDir::new().unwrap();
    let output = run_dur(temp.path(), &["parse", "2h 30m", "1,5h", "5h 35"]);

    assert!(
        output.status.success(),
        "dur parse should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout(&output),
        "2h 30m: 150 (2h 30m)\n1,5h: 90 (1h 30m)\n5h 35: 335 (5h 35m)\n"
    );
}

#[test]
fn test_parse_invalid_input_fails() {
    let temp = TempDir::new().unwrap();
    let output = run_dur(temp.path(), &["parse", "--explain", "45m", "5h 61"]);

    assert!(!output.status.success(), "invalid input should fail the command");
    let out = stdout(&output);
    assert!(out.contains("45m: 45 (45m)"));
    assert!(out.contains("5h 61: invalid (malformed duration: minutes after hours must be below 60)"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 of 2 inputs could not be parsed"));
}

#[test]
fn test_parse_json_output() {
    let temp = TempDir::new().unwrap();
    let output = run_dur(temp.path(), &["parse", "--json", "90"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value[0]["minutes"], 90);
    assert_eq!(value[0]["ok"], true);
}

#[test]
fn test_config_file_sets_style() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("dur.toml");
    std::fs::write(&config_path, "format_style = \"full\"\n").unwrap();

    let output = run_dur(
        temp.path(),
        &["--config", config_path.to_str().unwrap(), "format", "45"],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0h 45m\n");
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location_is_read() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".config/dur");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "json = true\n").unwrap();

    let output = run_dur(temp.path(), &["total", "2h", "30m"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["total_minutes"], 150);
}

#[test]
fn test_env_overrides_style() {
    let temp = TempDir::new().unwrap();
    let envs = [("DUR_FORMAT_STYLE", "full")];

    let output = run_dur_with_env(temp.path(), &envs, &["format", "150"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2h 30m\n");

    // Full style only differs below an hour
    let output = run_dur_with_env(temp.path(), &envs, &["format", "30"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0h 30m\n");
}

#[test]
fn test_total_with_budget() {
    let temp = TempDir::new().unwrap();
    let output = run_dur(temp.path(), &["total", "--budget", "8h", "2h 30m", "1.5h"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Total: 4h 0m (240 minutes)\nBudget: 8h 0m\nRemaining: 4h 0m\n"
    );
}

#[test]
fn test_format_rejects_out_of_range() {
    let temp = TempDir::new().unwrap();
    let output = run_dur(temp.path(), &["format", "2000"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot format 2000 minutes"));
}
