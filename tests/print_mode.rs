//! Integration tests for `--print` (markdown output of one week)

use std::path::PathBuf;
use std::process::Command;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run_print(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_shiftboard"))
        // Keep the user's config.toml out of the way.
        .arg("--config")
        .arg(fixture("empty.toml"))
        .arg("--print")
        .arg("--today")
        .arg("2024-06-12")
        .args(args)
        .output()
        .expect("Failed to execute shiftboard");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn roster() -> String {
    fixture("roster.json").display().to_string()
}

#[test]
fn test_prints_current_week() {
    let (stdout, _, code) = run_print(&[&roster()]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("# ACR Operations Shift Schedule\n"));
    assert!(stdout.contains("*06-10 through 06-16*"));
    assert!(stdout.contains("Week 2 of 2"));
    assert!(stdout.contains("## Owl Shift"));
    assert!(stdout.contains("## Day Shift"));
    assert!(stdout.contains("**06-12**"));
    assert!(stdout.contains("~~Lee~~"));
    assert!(stdout.contains("- #1 C1 Smith: swapped with Lee"));
}

#[test]
fn test_prints_requested_week() {
    let (stdout, _, code) = run_print(&["--week", "1", &roster()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("*06-03 through 06-09*"));
    assert!(stdout.contains("Week 1 of 2"));
    assert!(stdout.contains("Garcia"));
}

#[test]
fn test_out_of_range_week_warns() {
    let (stdout, stderr, code) = run_print(&["--week", "9", &roster()]);
    assert_eq!(code, 0);
    assert!(stderr.contains("week 9 out of range"));
    assert!(stdout.contains("Week 2 of 2"));
}

#[test]
fn test_missing_file_fails() {
    let missing = fixture("nope.json").display().to_string();
    let (stdout, stderr, code) = run_print(&[&missing]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("nope.json"));
}
