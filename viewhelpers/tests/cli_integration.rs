//! Integration tests for viewhelpers CLI

use std::io::Write;
use std::process::{Command, Stdio};

fn cargo_args(args: &[&str]) -> Vec<String> {
    let mut cmd_args = vec!["run", "-q", "-p", "viewhelpers", "--"];
    cmd_args.extend(args);
    cmd_args.into_iter().map(String::from).collect()
}

fn run_viewhelpers(args: &[&str]) -> (String, String, bool) {
    let output = Command::new("cargo")
        .args(cargo_args(args))
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn run_with_stdin(args: &[&str], input: &str) -> (String, bool) {
    let mut child = Command::new("cargo")
        .args(cargo_args(args))
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin not piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for command");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        output.status.success(),
    )
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_viewhelpers(&["--help"]);

    assert!(success);
    assert!(stdout.contains("viewhelpers"));
    assert!(stdout.contains("commify"));
    assert!(stdout.contains("snakeify"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_viewhelpers(&["--version"]);

    assert!(success);
    assert!(stdout.contains("viewhelpers"));
}

#[test]
fn test_commify() {
    let (stdout, _, success) = run_viewhelpers(&["commify", "79593255.66"]);

    assert!(success);
    assert_eq!(stdout.trim(), "79,593,255.66");
}

#[test]
fn test_snakeify() {
    let (stdout, _, success) = run_viewhelpers(&["snakeify", "Foo::BarBaz"]);

    assert!(success);
    assert_eq!(stdout.trim(), "foo/bar_baz");
}

#[test]
fn test_js_string_argument() {
    let (stdout, _, success) = run_viewhelpers(&["js-string", "it's </script>"]);

    assert!(success);
    assert_eq!(stdout.trim_end_matches('\n'), "it\\'s <\\/script>");
}

#[test]
fn test_js_string_stdin() {
    let (stdout, success) = run_with_stdin(&["js-string"], "say \"hi\"\r\nbye\n");

    assert!(success);
    assert_eq!(stdout.trim_end_matches('\n'), "say \\\"hi\\\"\\nbye");
}

#[test]
fn test_date_relative_and_absolute() {
    let now = "2024-06-15T12:00:00Z";

    let (stdout, _, success) = run_viewhelpers(&["date", "2024-06-12T12:00:00Z", "--now", now]);
    assert!(success);
    assert_eq!(stdout.trim(), "3 days ago");

    let (stdout, _, success) = run_viewhelpers(&["date", "2024-01-05", "--now", now]);
    assert!(success);
    assert_eq!(stdout.trim(), "Jan 5");

    let (stdout, _, success) = run_viewhelpers(&["date", "2019-01-05", "--now", now]);
    assert!(success);
    assert_eq!(stdout.trim(), "Jan 5, 2019");
}

#[test]
fn test_list_text_output() {
    let (stdout, _, success) = run_viewhelpers(&["list", "a", "b", "c", "d"]);

    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "<li class=\"first odd\">a</li>",
            "<li class=\"even\">b</li>",
            "<li class=\"odd\">c</li>",
            "<li class=\"last even\">d</li>",
        ]
    );
}

#[test]
fn test_list_json_output() {
    let (stdout, _, success) = run_viewhelpers(&["list", "a", "b", "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed[0]["content"], "a");
    assert_eq!(parsed[0]["classes"], serde_json::json!(["first", "odd"]));
    assert_eq!(parsed[1]["classes"], serde_json::json!(["last", "even"]));
}

#[test]
fn test_table_output() {
    let (stdout, _, success) = run_viewhelpers(&[
        "table", "--header", "A,B", "--row", "1,2", "--row", "3,4", "--attr", "id=t",
    ]);

    assert!(success);
    assert!(stdout.starts_with("<table id=\"t\"><thead><tr><th>A</th>"));
    assert!(stdout.contains("<tr><td>3</td>\n<td>4</td></tr>"));
}

#[test]
fn test_table_repeated_header() {
    let (stdout, _, success) = run_viewhelpers(&[
        "table", "--header", "A", "--header", "B", "--row", "1,2",
    ]);

    assert!(success);
    assert!(stdout.contains("<thead><tr><th>A</th>\n<th>B</th></tr></thead>"));
}

#[test]
fn test_date_parse_only_format_fails_cleanly() {
    let (_, stderr, success) = run_viewhelpers(&[
        "date",
        "2024-01-05",
        "--now",
        "2024-06-15T12:00:00Z",
        "--short-format",
        "%#z",
    ]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_table_without_rows_prints_nothing() {
    let (stdout, _, success) = run_viewhelpers(&["table", "--header", "A"]);

    assert!(success);
    assert!(stdout.is_empty());
}

#[test]
fn test_url() {
    let (stdout, _, success) = run_viewhelpers(&["url", "example.com"]);

    assert!(success);
    assert_eq!(stdout.trim(), "http://example.com");
}

#[test]
fn test_invalid_date() {
    let (_, stderr, success) = run_viewhelpers(&["date", "yesterday"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("yesterday"));
}

#[test]
fn test_invalid_attribute() {
    let (_, stderr, success) = run_viewhelpers(&["table", "--row", "1", "--attr", "nope"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}
