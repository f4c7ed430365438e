use assert_cmd::prelude::*;
use mockito::Matcher;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

/// Nothing listens here; connections are refused immediately.
const UNREACHABLE: &str = "http://127.0.0.1:1/api/v1";

fn write_config(dir: &Path, api_base: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    let contents = format!("api_base: {api_base}\ntimeout_secs: 5\n");
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn komet() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("komet"));
    cmd.env_remove("KOMET_CONFIG")
        .env_remove("KOMET_FORMAT")
        .env_remove("KOMET_DEBUG")
        .env_remove("API_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn version_prints_package_version() {
    komet()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://metrics.internal:8000/api/v1");

    let assert = komet()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));
    assert!(stdout.contains("http://metrics.internal:8000/api/v1"));
    assert!(stdout.contains("Request timeout: 5s"));

    Ok(())
}

#[test]
fn status_reports_flag_override() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://metrics.internal:8000/api/v1");

    komet()
        .args(["status", "--api-base", "https://komet.example.com/api/v1"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://komet.example.com/api/v1"));

    Ok(())
}

#[test]
fn init_writes_config_from_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = temp.path().join("nested").join("config.yaml");

    komet()
        .args(["init", "--api-base", "http://localhost:9000/api/v1"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let saved = fs::read_to_string(&config_path)?;
    assert!(saved.contains("http://localhost:9000/api/v1"));

    Ok(())
}

#[test]
fn missing_explicit_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = temp.path().join("absent.yaml");

    komet()
        .args(["project", "list"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));

    Ok(())
}

#[test]
fn invalid_api_base_is_rejected() {
    komet()
        .args(["team", "list", "--api-base", "localhost:8000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("http:// or https://"));
}

#[test]
fn list_against_unreachable_service_prints_empty_table() {
    komet()
        .args(["project", "list", "--api-base", UNREACHABLE])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found."));
}

#[test]
fn report_against_unreachable_service_fails_with_fallback_message() {
    komet()
        .args(["metrics", "project", "42", "bottlenecks", "--api-base", UNREACHABLE])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to fetch bottlenecks"));
}

fn warn_lines(stderr: &str) -> Vec<(usize, &str)> {
    stderr
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains("WARN") && line.contains("komet::client::komet"))
        .collect()
}

#[test]
fn degraded_list_logs_the_failure_once() {
    let assert = komet()
        .args(["project", "list", "--api-base", UNREACHABLE])
        .assert()
        .success();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    let warnings = warn_lines(&stderr);
    assert_eq!(warnings.len(), 1, "stderr was:\n{}", stderr);
    assert!(warnings[0].1.contains("Failed to fetch projects"));
}

#[test]
fn raised_failure_is_logged_once_before_the_error() {
    let assert = komet()
        .args(["metrics", "project", "42", "bottlenecks", "--api-base", UNREACHABLE])
        .assert()
        .code(1);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    let warnings = warn_lines(&stderr);
    assert_eq!(warnings.len(), 1, "stderr was:\n{}", stderr);

    let error_line = stderr
        .lines()
        .position(|line| line.starts_with("Error: Failed to fetch bottlenecks"))
        .expect("error line missing");
    assert!(warnings[0].0 < error_line);
}

#[test]
fn json_list_against_unreachable_service_is_empty_data() {
    let assert = komet()
        .args(["team", "list", "--format", "json", "--api-base", UNREACHABLE])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed["data"], serde_json::json!([]));
    assert_eq!(parsed["meta"]["version"], env!("CARGO_PKG_VERSION"));
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn project_list_renders_table() {
    let mut server = mockito::Server::new();
    let _projects = server
        .mock("GET", "/api/v1/projects")
        .with_status(200)
        .with_body(r#"[{"id":1,"name":"Alpha"},{"id":2,"name":"Beta","external_id":"BETA"}]"#)
        .create();

    komet()
        .args(["project", "list", "--api-base"])
        .arg(format!("{}/api/v1", server.url()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("BETA"));
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn project_list_json_keeps_service_payload() {
    let mut server = mockito::Server::new();
    let _projects = server
        .mock("GET", "/api/v1/projects")
        .with_status(200)
        .with_body(r#"[{"id":1,"name":"Alpha","owner":"platform"}]"#)
        .create();

    let assert = komet()
        .args(["project", "list", "--format", "json", "--api-base"])
        .arg(format!("{}/api/v1", server.url()))
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(
        parsed["data"],
        serde_json::json!([{"id": 1, "name": "Alpha", "owner": "platform"}])
    );
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn project_create_conflict_surfaces_detail() {
    let mut server = mockito::Server::new();
    let _create = server
        .mock("POST", "/api/v1/projects")
        .match_body(Matcher::Json(serde_json::json!({"name": "Beta"})))
        .with_status(400)
        .with_body(r#"{"detail":"name already exists"}"#)
        .create();

    komet()
        .args(["project", "create", "--name", "Beta", "--api-base"])
        .arg(format!("{}/api/v1", server.url()))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: name already exists"));
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn metrics_sends_period_days() {
    let mut server = mockito::Server::new();
    let report = server
        .mock("GET", "/api/v1/metrics/project/42/effectiveness")
        .match_query(Matcher::UrlEncoded("period_days".into(), "7".into()))
        .with_status(200)
        .with_body(r#"{"project_id":42,"avg_effectiveness_score":0.8}"#)
        .create();

    komet()
        .args(["metrics", "project", "42", "effectiveness", "--period-days", "7"])
        .arg("--api-base")
        .arg(format!("{}/api/v1", server.url()))
        .assert()
        .success()
        .stdout(predicate::str::contains("avg_effectiveness_score"))
        .stdout(predicate::str::contains("0.80"));

    report.assert();
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn attention_sends_default_threshold_and_limit() {
    let mut server = mockito::Server::new();
    let report = server
        .mock("GET", "/api/v1/metrics/project/3/prs-needing-attention")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("min_hours".into(), "0".into()),
            Matcher::UrlEncoded("limit".into(), "5".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"project_id":3,"total_count":1,"prs":[{"pr_id":9,"title":"Split invoice generator","time_in_review_hours":30.0}]}"#,
        )
        .create();

    komet()
        .args(["metrics", "attention", "3", "--api-base"])
        .arg(format!("{}/api/v1", server.url()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Split invoice generator"))
        .stdout(predicate::str::contains("30.0h"));

    report.assert();
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn delete_with_yes_skips_prompt() {
    let mut server = mockito::Server::new();
    let delete = server
        .mock("DELETE", "/api/v1/teams/4")
        .with_status(200)
        .with_body(r#"{"message":"Team deleted"}"#)
        .create();

    komet()
        .args(["team", "delete", "4", "--yes", "--api-base"])
        .arg(format!("{}/api/v1", server.url()))
        .assert()
        .success()
        .stderr(predicate::str::contains("Team deleted"));

    delete.assert();
}
