//! The `apigw-router` binary against the demo manifest.

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;

mod common;
use common::v1_event;

fn demo(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(file)
}

fn apigw_router(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_apigw-router"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn write_event(name: &str, event: &Value) -> PathBuf {
    let path = std::env::temp_dir().join(format!("apigw-cli-{}-{name}.json", std::process::id()));
    std::fs::write(&path, event.to_string()).unwrap();
    path
}

#[test]
fn test_check_lists_routes() {
    let config = demo("routes.toml");
    let output = apigw_router(&["check", "--config", config.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("4 routes"));
    assert!(stdout.contains("/foo/*"));
}

#[test]
fn test_resolve_matched_event_succeeds() {
    let config = demo("routes.toml");
    let event = demo("event-v2.json");
    let output = apigw_router(&[
        "resolve",
        "--config",
        config.to_str().unwrap(),
        "--event",
        event.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["statusCode"], 201);
    assert_eq!(body["body"], "exact");
}

#[test]
fn test_resolve_error_value_exits_non_zero() {
    let config = demo("routes.toml");
    let event = write_event("miss", &v1_event("GET", "/nowhere"));
    let output = apigw_router(&[
        "resolve",
        "--config",
        config.to_str().unwrap(),
        "--event",
        event.to_str().unwrap(),
    ]);
    std::fs::remove_file(&event).unwrap();

    assert!(!output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], "No route found for /nowhere");
}

#[test]
fn test_missing_manifest_reports_error() {
    let output = apigw_router(&["check", "--config", "/nonexistent/routes.toml"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: "));
}
