//! End-to-end tests for the `rollcall` binary
//!
//! Every test points `--config` at a temporary file so the user's real
//! configuration is never read or written.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const TEAM_PAGE: &str = "Jane Doe\nDirector of Finance\njane@acme.com\nMobile: 555-111-2222\nView Bio\n";

fn rollcall(config: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rollcall"))
        .arg("--config")
        .arg(config)
        .arg("--no-color")
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let mut pipe = child.stdin.take().unwrap();
        pipe.write_all(stdin.unwrap_or("").as_bytes()).unwrap();
    }
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_clean_from_stdin() {
    let dir = TempDir::new().unwrap();
    let output = rollcall(
        &dir.path().join("config.toml"),
        &["clean", "--format", "quiet"],
        Some(TEAM_PAGE),
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Jane Doe\njane@acme.com\nMobile: 555-111-2222\n");
}

#[test]
fn test_extract_csv_from_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("team.txt");
    fs::write(&input, TEAM_PAGE).unwrap();

    let output = rollcall(
        &dir.path().join("config.toml"),
        &["extract", input.to_str().unwrap(), "--format", "csv"],
        None,
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Name,Title,Email,Mobile,Direct,Office\nJane Doe,,jane@acme.com,5551112222,,\n"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("3 unique lines (removed 2 duplicates or filtered lines)"));
}

#[test]
fn test_extract_display_lines() {
    let dir = TempDir::new().unwrap();
    let output = rollcall(
        &dir.path().join("config.toml"),
        &["extract", "--format", "display"],
        Some("Jane Doe\njane@acme.com\nMobile: 555-111-2222\n\nJohn Allen Smith\nDirect: 555-333-4444\n"),
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Jane Doe |  | jane@acme.com | Mobile: 5551112222\n\
         John Allen Smith |  |  | Direct: 5553334444\n"
    );
}

#[test]
fn test_extract_writes_artifacts() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("out.csv");
    let txt = dir.path().join("out.txt");

    let output = rollcall(
        &dir.path().join("config.toml"),
        &[
            "extract",
            "--keep-titles",
            "--columns",
            "basic",
            "--csv-out",
            csv.to_str().unwrap(),
            "--txt-out",
            txt.to_str().unwrap(),
            "--format",
            "json",
        ],
        Some(TEAM_PAGE),
    );

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["contacts"][0]["email"], "jane@acme.com");

    assert_eq!(
        fs::read_to_string(&csv).unwrap(),
        "Name,Title,Email\nJane Doe,,jane@acme.com\n"
    );
    assert!(fs::read_to_string(&txt).unwrap().contains("Director of Finance"));
}

#[test]
fn test_nothing_extracted_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let output = rollcall(&dir.path().join("config.toml"), &["extract"], Some("\n  \n"));

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No contacts extracted"));
}

#[test]
fn test_profile_set_and_use() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");

    let output = rollcall(
        &config,
        &["profile", "set", "team", "--preset", "roster", "--drop", "headshot,,view bio"],
        None,
    );
    assert!(output.status.success());
    assert!(config.exists());

    let output = rollcall(
        &config,
        &["extract", "--profile", "team", "--format", "quiet"],
        Some("Jane Doe Head of Sales jane@acme.com\nBob Ray Editor bob@acme.com\n"),
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Jane Doe\nBob Ray\n");
}

#[test]
fn test_unknown_profile_fails() {
    let dir = TempDir::new().unwrap();
    let output = rollcall(
        &dir.path().join("config.toml"),
        &["extract", "--profile", "missing"],
        Some("Jane Doe"),
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: Configuration error"));
}
