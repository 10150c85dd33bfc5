//! Integration tests for the conveyor binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const HELLO_JOB: &str = r#"{"commands": [{"title": "Test Command", "command": "echo 'Hello, World!'", "slug": "test", "include_output": true}]}"#;

const FAILING_JOB: &str = r#"{"commands": [
    {"title": "Broken", "command": "exit 1", "slug": "broken", "fail_message": "it broke"},
    {"title": "Skipped", "command": "true", "slug": "skipped"}
]}"#;

fn conveyor() -> Command {
    let mut cmd = Command::new(cargo_bin("conveyor"));
    cmd.env_remove("RESPONSE_URL")
        .env_remove("CONVEYOR_CONFIG")
        .env_remove("CONVEYOR_ROOT_DIR")
        .env_remove("CONVEYOR_SHELL")
        .env_remove("CONVEYOR_TIMEOUT");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    conveyor()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("handle"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    conveyor()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn run_prints_success_report() -> Result<(), Box<dyn std::error::Error>> {
    let output = conveyor()
        .args(["run", "-"])
        .write_stdin(HELLO_JOB)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(report["conclusion"], "success");
    assert_eq!(report["steps"][0]["output"], "Hello, World!\n");
    assert_eq!(report["steps"][0]["exit_code"], 0);
    Ok(())
}

#[test]
fn run_reads_job_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = temp.path().join("job.json");
    fs::write(&path, HELLO_JOB)?;

    conveyor()
        .arg("run")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"conclusion\":\"success\""))
        .stderr(predicate::str::contains("Test Command"));
    Ok(())
}

#[test]
fn run_failure_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let output = conveyor()
        .args(["run", "--quiet"])
        .write_stdin(FAILING_JOB)
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(report["conclusion"], "failure");
    assert_eq!(report["steps"].as_array().map(Vec::len), Some(1));
    assert_eq!(report["steps"][0]["output"], "it broke");
    Ok(())
}

#[test]
fn run_rejects_malformed_job() -> Result<(), Box<dyn std::error::Error>> {
    conveyor()
        .arg("run")
        .write_stdin(r#"{"env": {}}"#)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to parse job"));
    Ok(())
}

#[test]
fn run_uses_root_dir_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("marker.txt"), "")?;

    conveyor()
        .arg("run")
        .arg("--root-dir")
        .arg(temp.path())
        .write_stdin(r#"{"commands": [{"slug": "ls", "command": "ls", "include_output": true}]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("marker.txt"));
    Ok(())
}

#[test]
fn run_reads_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let work = temp.path().join("work");
    fs::create_dir(&work)?;
    fs::write(work.join("from-config.txt"), "")?;
    let config = temp.path().join("worker.yml");
    fs::write(&config, format!("root_dir: {}\n", work.display()))?;

    conveyor()
        .arg("--config")
        .arg(&config)
        .arg("run")
        .write_stdin(r#"{"commands": [{"slug": "ls", "command": "ls", "include_output": true}]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("from-config.txt"));
    Ok(())
}

#[test]
fn invalid_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("worker.yml");
    fs::write(&config, "timeout_secs: [broken")?;

    conveyor()
        .arg("--config")
        .arg(&config)
        .arg("run")
        .write_stdin(HELLO_JOB)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn handle_requires_response_url() -> Result<(), Box<dyn std::error::Error>> {
    conveyor()
        .arg("handle")
        .write_stdin(format!(
            r#"{{"Records": [{{"body": {}}}]}}"#,
            serde_json::to_string(HELLO_JOB)?
        ))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("response_url is not set"));
    Ok(())
}

#[test]
fn handle_delivers_to_response_url() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/callback")
            .header("accept", "application/json");
        then.status(200);
    });

    conveyor()
        .arg("handle")
        .env("RESPONSE_URL", server.url("/callback"))
        .write_stdin(format!(
            r#"{{"Records": [{{"messageId": "1", "body": {}}}]}}"#,
            serde_json::to_string(HELLO_JOB)?
        ))
        .assert()
        .success();

    mock.assert();
    Ok(())
}

#[test]
fn handle_rejects_empty_event() -> Result<(), Box<dyn std::error::Error>> {
    conveyor()
        .args(["handle", "--response-url", "http://127.0.0.1:1/"])
        .write_stdin(r#"{"Records": []}"#)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No records found"));
    Ok(())
}
