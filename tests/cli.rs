//! CLI integration tests for the grid-robot binary.

use std::io::Write;
use std::process::{Command, Stdio};

const SAMPLE: &str = "5 3
1 1 E
RFRFRFRF

3 2 N
FRRFLLFFRRFLL

0 3 W
LLFFFLFLFL
";

fn run(args: &[&str], stdin: &str) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_grid-robot");
    let mut child = Command::new(bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn grid-robot");
    child
        .stdin
        .take()
        .expect("stdin not captured")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait on grid-robot")
}

#[test]
fn text_output_matches_sample() {
    let output = run(&[], SAMPLE);
    assert!(output.status.success(), "exit status: {:?}", output.status);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["1 1 E", "3 3 N LOST", "2 3 S"]);
}

#[test]
fn json_output_reports_scent() {
    let output = run(&["--format", "json", "-"], SAMPLE);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(report["results"].as_array().map(Vec::len), Some(3));
    assert_eq!(report["results"][1]["lost"], serde_json::json!(true));
    assert_eq!(report["results"][2]["heading"], serde_json::json!("S"));
    assert_eq!(
        report["scent"],
        serde_json::json!([{ "position": [3, 3], "heading": "N" }])
    );
}

#[test]
fn no_scent_flag_loses_third_robot() {
    let output = run(&["--no-scent"], SAMPLE);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["1 1 E", "3 3 N LOST", "3 3 N LOST"]);
}

#[test]
fn malformed_input_fails() {
    let output = run(&[], "5 3\n1 1 E\nFZF\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid mission"), "stderr: {stderr}");
}
