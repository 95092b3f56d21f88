//! Integration tests for the `tp` CLI.
//!
//! Each test runs `tp` as a subprocess in a temp directory, feeding the
//! buffer on stdin, and checks stdout/stderr.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Get the path to the built `tp` binary.
fn tp_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("tp");
    path
}

/// Run `tp` with the given args and stdin, returning (stdout, stderr, success).
fn run_tp(dir: &Path, args: &[&str], stdin: &str) -> (String, String, bool) {
    let mut child = Command::new(tp_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run tp");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

/// Run `tp` expecting success, return stdout.
fn run_tp_ok(dir: &Path, args: &[&str], stdin: &str) -> String {
    let (stdout, stderr, success) = run_tp(dir, args, stdin);
    assert!(
        success,
        "tp {:?} failed:\nstdout: {}\nstderr: {}",
        args, stdout, stderr
    );
    stdout
}

#[test]
fn fmt_bold_range() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_tp_ok(
        tmp.path(),
        &["fmt", "bold", "--start", "0", "--end", "5"],
        "hello world",
    );
    assert_eq!(out, "**hello** world");
}

#[test]
fn fmt_bold_strips_existing_markers() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_tp_ok(tmp.path(), &["fmt", "b", "--end", "6"], "**hi**");
    assert_eq!(out, "hi");
}

#[test]
fn fmt_json_reports_new_selection() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_tp_ok(
        tmp.path(),
        &["fmt", "bold", "--start", "0", "--end", "5", "--json"],
        "hello world",
    );
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["text"], "**hello** world");
    assert_eq!(json["selection"]["start"], 0);
    assert_eq!(json["selection"]["end"], 9);
    assert_eq!(json["direction"], "applied");
}

#[test]
fn fmt_numbered_list_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let on = run_tp_ok(tmp.path(), &["fmt", "numbered-list"], "a\nb\n");
    assert_eq!(on, "1. a\n2. b\n");
    let off = run_tp_ok(tmp.path(), &["fmt", "h"], &on);
    assert_eq!(off, "a\nb\n");
}

#[test]
fn fmt_italic_wraps_bold_text() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_tp_ok(tmp.path(), &["fmt", "italic"], "**x**");
    assert_eq!(out, "***x***");
}

#[test]
fn fmt_underline_toggles() {
    let tmp = tempfile::tempdir().unwrap();
    let on = run_tp_ok(tmp.path(), &["fmt", "u", "--start", "4", "--end", "9"], "say hello");
    assert_eq!(on, "say <u>hello</u>");
    let off = run_tp_ok(tmp.path(), &["fmt", "u", "--start", "4"], &on);
    assert_eq!(off, "say hello");
}

#[test]
fn fmt_empty_selection_prints_input() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_tp_ok(
        tmp.path(),
        &["fmt", "bold", "--start", "3", "--end", "3", "--json"],
        "abc def",
    );
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["text"], "abc def");
    assert_eq!(json["direction"], "unchanged");
}

#[test]
fn fmt_unknown_style_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let (_stdout, stderr, success) = run_tp(tmp.path(), &["fmt", "strike"], "x");
    assert!(!success);
    assert!(stderr.contains("unknown style"), "stderr: {}", stderr);
}

#[test]
fn styles_lists_shortcuts() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_tp_ok(tmp.path(), &["styles"], "");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("bold"));
    assert!(lines[0].contains("Ctrl+B"));
    assert!(lines[3].starts_with("numbered-list"));
    assert!(lines[3].contains("Ctrl+H"));
}

#[test]
fn styles_json() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_tp_ok(tmp.path(), &["styles", "--json"], "");
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["bold", "italic", "underline", "numbered-list"]);
}

#[test]
fn log_file_receives_debug_events() {
    let tmp = tempfile::tempdir().unwrap();
    let log = tmp.path().join("tp.log");
    let log_arg = log.to_str().unwrap();
    let mut child = Command::new(tp_bin())
        .args(["fmt", "bold", "--log-file", log_arg])
        .current_dir(tmp.path())
        .env("RUST_LOG", "debug")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"x").unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "**x**");

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("formatted stdin"), "log: {}", contents);
}
