//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary and verify outputs. Each run gets its own
//! HOME so configuration never touches the real user directory.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run a CLI command with optional stdin and return (stdout, stderr, code).
fn run_cli(home: &std::path::Path, args: &[&str], stdin: Option<&str>) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_slotline"))
        .args(args)
        .env("HOME", home)
        .env_remove("SLOTLINE_ENV")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("write stdin");
        }
    }

    let output = child.wait_with_output().expect("CLI did not finish");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

#[test]
fn test_time_combine_and_split() {
    let home = tempfile::tempdir().unwrap();
    let (out, _, code) = run_cli(home.path(), &["time", "combine", "2024-01-01", "10:30"], None);
    assert_eq!(code, 0);
    assert_eq!(out.trim(), "2024-01-01T10:30:00");

    let (out, _, code) = run_cli(home.path(), &["time", "split", "2024-01-01 10:30:45"], None);
    assert_eq!(code, 0);
    let parts = parse_json(&out);
    assert_eq!(parts["date"], "2024-01-01");
    assert_eq!(parts["time"], "10:30");
}

#[test]
fn test_time_combine_incomplete_fails() {
    let home = tempfile::tempdir().unwrap();
    let (_, err, code) = run_cli(home.path(), &["time", "combine", "2024-01-01", ""], None);
    assert_eq!(code, 1);
    assert!(err.contains("error:"));
}

#[test]
fn test_range_resolve_inverted_is_null() {
    let home = tempfile::tempdir().unwrap();
    let (out, _, code) = run_cli(
        home.path(),
        &["range", "resolve", "2024-01-02T00:00:00", "2024-01-01T00:00:00"],
        None,
    );
    assert_eq!(code, 0);
    assert_eq!(out.trim(), "null");
}

#[test]
fn test_range_axis() {
    let home = tempfile::tempdir().unwrap();
    let (out, _, code) = run_cli(
        home.path(),
        &["range", "axis", "2024-03-05 08:00", "2024-03-05 18:00"],
        None,
    );
    assert_eq!(code, 0);
    let axis = parse_json(&out);
    assert_eq!(axis["start"], "03/05 08:00");
    assert_eq!(axis["mid"], "03/05 13:00");
    assert_eq!(axis["end"], "03/05 18:00");
}

#[test]
fn test_timeline_project_from_stdin() {
    let home = tempfile::tempdir().unwrap();
    let intervals = r#"[
        {"id": 1, "resourceId": 1, "type": "ALLOCATION",
         "start": "2024-03-05T09:00:00", "end": "2024-03-05T10:00:00"},
        {"id": 2, "resourceId": 1, "type": "MAINTENANCE", "level": "SOFT",
         "start": "2024-03-06T09:00:00", "end": "2024-03-06T10:00:00"}
    ]"#;
    let (out, _, code) = run_cli(
        home.path(),
        &[
            "timeline",
            "project",
            "--start",
            "2024-03-05T08:00:00",
            "--end",
            "2024-03-05T18:00:00",
        ],
        Some(intervals),
    );
    assert_eq!(code, 0);
    let timeline = parse_json(&out);
    let rows = timeline["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows[0]["bar"]["leftPct"].is_number());
    assert_eq!(rows[1]["bar"]["hidden"], true);
    assert_eq!(rows[1]["class"], "maintenance-soft");
}

#[test]
fn test_conflict_present() {
    let home = tempfile::tempdir().unwrap();
    let verdict = r#"{"hasConflict": true, "type": "SOFT", "message": "maintenance advised"}"#;
    let (out, _, code) = run_cli(home.path(), &["conflict", "present"], Some(verdict));
    assert_eq!(code, 0);
    let shown = parse_json(&out);
    assert_eq!(shown["severity"], "WARNING");
    assert_eq!(shown["message"], "maintenance advised");
}

#[test]
fn test_conflict_check_requires_resource() {
    let home = tempfile::tempdir().unwrap();
    let (_, err, code) = run_cli(
        home.path(),
        &[
            "conflict",
            "check",
            "--start-date",
            "2024-01-01",
            "--start-time",
            "09:00",
            "--end-date",
            "2024-01-01",
            "--end-time",
            "10:00",
        ],
        None,
    );
    assert_eq!(code, 1);
    assert!(err.contains("select a resource"));
}

#[test]
fn test_label_fallback() {
    let home = tempfile::tempdir().unwrap();
    let (out, _, code) = run_cli(home.path(), &["label", "level", "SOFT"], None);
    assert_eq!(code, 0);
    assert_eq!(out.trim(), "Soft conflict");

    let (out, _, code) = run_cli(home.path(), &["label", "status", "ARCHIVED"], None);
    assert_eq!(code, 0);
    assert_eq!(out.trim(), "ARCHIVED\tinfo");
}

#[test]
fn test_config_set_get() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(
        home.path(),
        &["config", "set", "query.default_window_hours", "12"],
        None,
    );
    assert_eq!(code, 0);

    let (out, _, code) = run_cli(
        home.path(),
        &["config", "get", "query.default_window_hours"],
        None,
    );
    assert_eq!(code, 0);
    assert_eq!(out.trim(), "12");

    let (_, _, code) = run_cli(home.path(), &["config", "get", "query.nope"], None);
    assert_eq!(code, 1);
}

#[test]
fn test_timeline_project_uses_default_window() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(
        home.path(),
        &["config", "set", "query.default_window_hours", "2"],
        None,
    );
    assert_eq!(code, 0);

    let intervals = r#"[
        {"id": 1, "resourceId": 1, "type": "ALLOCATION",
         "start": "2024-03-05T09:00:00", "end": "2024-03-05T10:00:00"}
    ]"#;
    let (out, _, code) = run_cli(
        home.path(),
        &["timeline", "project", "--start", "2024-03-05T08:00:00"],
        Some(intervals),
    );
    assert_eq!(code, 0);
    let timeline = parse_json(&out);
    assert_eq!(timeline["axis"]["start"], "03/05 08:00");
    assert_eq!(timeline["axis"]["mid"], "03/05 09:00");
    assert_eq!(timeline["axis"]["end"], "03/05 10:00");

    let range = &timeline["range"];
    let span = range["endMs"].as_f64().unwrap() - range["startMs"].as_f64().unwrap();
    assert_eq!(span, 7_200_000.0);

    let bar = &timeline["rows"][0]["bar"];
    assert_eq!(bar["leftPct"].as_f64(), Some(50.0));
    assert_eq!(bar["widthPct"].as_f64(), Some(50.0));
}

#[test]
fn test_timeline_schedule_filters_and_orders() {
    let home = tempfile::tempdir().unwrap();
    let snapshot = r#"{
        "allocations": [
            {"id": 1, "resourceId": 7, "projectId": 3,
             "startTime": "2024-03-05T11:00:00", "endTime": "2024-03-05T12:00:00"},
            {"id": 2, "resourceId": 8, "projectId": 3,
             "startTime": "2024-03-05T09:00:00", "endTime": "2024-03-05T10:00:00"}
        ],
        "maintenanceWindows": [
            {"id": 5, "resourceId": 7, "type": "SOFT", "reason": "Firmware",
             "startTime": "2024-03-05T09:00:00", "endTime": "2024-03-05T10:00:00"},
            {"id": 6, "resourceId": 9,
             "startTime": "2024-03-05T08:30:00", "endTime": "2024-03-05T09:30:00"}
        ]
    }"#;
    let (out, _, code) = run_cli(
        home.path(),
        &[
            "timeline",
            "schedule",
            "--resource",
            "7",
            "--start",
            "2024-03-05T08:00:00",
            "--end",
            "2024-03-05T18:00:00",
        ],
        Some(snapshot),
    );
    assert_eq!(code, 0);
    let timeline = parse_json(&out);
    let rows = timeline["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0]["interval"]["id"], 5);
    assert_eq!(rows[0]["interval"]["type"], "MAINTENANCE");
    assert_eq!(rows[0]["class"], "maintenance-soft");
    assert_eq!(rows[1]["interval"]["id"], 1);
    assert_eq!(rows[1]["interval"]["type"], "ALLOCATION");
    assert!(rows.iter().all(|row| row["interval"]["resourceId"] == 7));
}

#[test]
fn test_timeline_schedule_rejects_inverted_window() {
    let home = tempfile::tempdir().unwrap();
    let (_, err, code) = run_cli(
        home.path(),
        &[
            "timeline",
            "schedule",
            "--resource",
            "7",
            "--start",
            "2024-03-05T18:00:00",
            "--end",
            "2024-03-05T08:00:00",
        ],
        Some("{}"),
    );
    assert_eq!(code, 1);
    assert!(err.contains("error:"));
}
