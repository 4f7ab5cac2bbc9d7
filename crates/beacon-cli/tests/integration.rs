//! Integration tests for CLI commands.

use serde_json::{json, Value};
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn write_actions(lines: &[Value]) -> (TempDir, String) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("actions.jsonl");

    let contents = lines
        .iter()
        .map(|line| serde_json::to_string(line).unwrap())
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(&path, contents).unwrap();

    (temp_dir, path.to_string_lossy().to_string())
}

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new("cargo")
        .args(["run", "--bin", "beacon", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

fn run_cli_with_stdin(args: &[&str], input: &str) -> (bool, String, String) {
    let mut child = Command::new("cargo")
        .args(["run", "--bin", "beacon", "--"])
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("Failed to write to CLI stdin");

    let output = child.wait_with_output().expect("Failed to wait for CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

fn identify_action() -> Value {
    json!({
        "type": "SIGN_IN",
        "meta": {
            "analytics": {"eventType": "identify", "eventPayload": {"userId": "user-1"}}
        }
    })
}

fn broken_page_action() -> Value {
    json!({
        "type": "PAGE_VIEW",
        "meta": {
            "analytics": {"eventType": "page", "eventPayload": {"category": "Docs"}}
        }
    })
}

#[test]
fn test_compose_command() {
    let (_temp_dir, path) = write_actions(&[identify_action()]);

    let (success, stdout, _) = run_cli(&["compose", &path]);
    assert!(success);
    let row: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(row, json!(["identify", "user-1"]));
}

#[test]
fn test_compose_json_output() {
    let (_temp_dir, path) = write_actions(&[identify_action()]);

    let (success, stdout, _) = run_cli(&["compose", &path, "--json"]);
    assert!(success);
    let call: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(call["kind"], "identify");
    assert_eq!(call["args"], json!(["user-1"]));
}

#[test]
fn test_compose_untracked_action_fails() {
    let (_temp_dir, path) = write_actions(&[json!({"type": "TICK"})]);

    let (success, _, stderr) = run_cli(&["compose", &path]);
    assert!(!success);
    assert!(stderr.contains("no analytics directive"));
}

#[test]
fn test_compose_reports_contract_violation() {
    let (_temp_dir, path) = write_actions(&[broken_page_action()]);

    let (success, _, stderr) = run_cli(&["compose", &path]);
    assert!(!success);
    assert!(stderr.contains("name"));
}

#[test]
fn test_compose_reads_action_from_stdin() {
    let action = serde_json::to_string(&identify_action()).unwrap();

    let (success, stdout, _) = run_cli_with_stdin(&["compose"], &action);
    assert!(success);
    let row: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(row, json!(["identify", "user-1"]));
}

#[test]
fn test_check_command() {
    let (_temp_dir, path) = write_actions(&[
        identify_action(),
        json!({"type": "TICK"}),
        broken_page_action(),
    ]);

    let (success, stdout, _) = run_cli(&["check", &path]);
    assert!(success);
    assert!(stdout.contains("VERDICT"));
    assert!(stdout.contains("ok"));
    assert!(stdout.contains("untracked"));
    assert!(stdout.contains("invalid"));
}

#[test]
fn test_check_strict_fails_on_invalid() {
    let (_temp_dir, path) = write_actions(&[identify_action(), broken_page_action()]);

    let (success, _, stderr) = run_cli(&["check", &path, "--strict"]);
    assert!(!success);
    assert!(stderr.contains("Error"));
    assert!(stderr.contains("1 of 2"));
}

#[test]
fn test_check_strict_passes_clean_file() {
    let (_temp_dir, path) = write_actions(&[identify_action(), json!({"type": "TICK"})]);

    let (success, _, _) = run_cli(&["check", &path, "--strict"]);
    assert!(success);
}

#[test]
fn test_check_json_output() {
    let (_temp_dir, path) = write_actions(&[identify_action(), broken_page_action()]);

    let (success, stdout, _) = run_cli(&["check", &path, "--json"]);
    assert!(success);

    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 2);
    let first: Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["verdict"], "ok");
    assert_eq!(first["action"], "SIGN_IN");
    let second: Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["verdict"], "invalid");
    assert!(second["detail"].as_str().unwrap().contains("name"));
}

#[test]
fn test_check_max_actions() {
    let (_temp_dir, path) = write_actions(&[identify_action(), broken_page_action()]);

    let (success, stdout, _) = run_cli(&["check", &path, "--json", "--max-actions", "1"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 1);
}

#[test]
fn test_check_table_handles_multibyte_action_types() {
    let (_temp_dir, path) = write_actions(&[
        json!({"type": "ДЕЙСТВИЕДЕЙСТВИЕ", "meta": {"analytics": "identify"}}),
        json!({"type": "ДЕЙСТВИЕ".repeat(4), "meta": {"analytics": "identify"}}),
    ]);

    let (success, stdout, _) = run_cli(&["check", &path]);
    assert!(success);
    assert!(stdout.contains("ДЕЙСТВИЕДЕЙСТВИЕ"));
    assert!(stdout.contains("..."));
}

#[test]
fn test_emit_command() {
    let (_temp_dir, path) = write_actions(&[
        identify_action(),
        json!({"type": "TICK"}),
        json!({"type": "VIDEO_PLAYED", "meta": {"analytics": "track"}}),
    ]);

    let (success, stdout, _) = run_cli(&["emit", &path]);
    assert!(success);

    let rows: Vec<Value> = stdout
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], json!(["identify", "user-1"]));
    assert_eq!(rows[1], json!(["track", "VIDEO_PLAYED"]));
}

#[test]
fn test_emit_reads_actions_from_stdin() {
    let lines = format!(
        "{}\n{}",
        serde_json::to_string(&identify_action()).unwrap(),
        serde_json::to_string(&json!({"type": "VIDEO_PLAYED", "meta": {"analytics": "track"}}))
            .unwrap()
    );

    let (success, stdout, _) = run_cli_with_stdin(&["emit"], &lines);
    assert!(success);

    let rows: Vec<Value> = stdout
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], json!(["identify", "user-1"]));
    assert_eq!(rows[1], json!(["track", "VIDEO_PLAYED"]));
}

#[test]
fn test_emit_fails_on_contract_violation() {
    let (_temp_dir, path) = write_actions(&[broken_page_action(), identify_action()]);

    let (success, _, stderr) = run_cli(&["emit", &path]);
    assert!(!success);
    assert!(stderr.contains("line 1"));
}

#[test]
fn test_emit_lenient_drops_and_continues() {
    let (_temp_dir, path) = write_actions(&[broken_page_action(), identify_action()]);

    let (success, stdout, stderr) = run_cli(&["emit", &path, "--lenient"]);
    assert!(success);

    let rows: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("identify"));
    assert!(stderr.contains("dropped"));
}

#[test]
fn test_emit_lenient_still_fails_unknown_kind() {
    let (_temp_dir, path) = write_actions(&[json!({"type": "X", "meta": {"analytics": "group"}})]);

    let (success, _, stderr) = run_cli(&["emit", &path, "--lenient"]);
    assert!(!success);
    assert!(stderr.contains("group"));
}

#[test]
fn test_kinds_command() {
    let (success, stdout, _) = run_cli(&["kinds"]);
    assert!(success);
    assert!(stdout.contains("KIND"));
    assert!(stdout.contains("identify"));
    assert!(stdout.contains("previousId"));
    assert!(stdout.contains("require-when:category"));
}

#[test]
fn test_kinds_json_output() {
    let (success, stdout, _) = run_cli(&["kinds", "--json"]);
    assert!(success);

    let kinds: Value = serde_json::from_str(&stdout).unwrap();
    let kinds = kinds.as_array().unwrap();
    assert_eq!(kinds.len(), 4);
    assert_eq!(kinds[0]["kind"], "identify");
    assert_eq!(kinds[0]["fields"][0]["name"], "userId");
    assert_eq!(kinds[0]["fields"][1]["absent"], "fill-empty");
}
