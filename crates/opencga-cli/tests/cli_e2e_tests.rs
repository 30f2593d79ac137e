//! End-to-end tests for the opencga binary
//!
//! These tests run the real binary against a mock OpenCGA server:
//! - Endpoint discovery
//! - Dry runs and live calls
//! - Request bodies from files
//! - Error reporting

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const REST_ROOT: &str = "/opencga/webservices/rest/v2";

/// Binary with a clean OpenCGA environment
fn opencga() -> Command {
    let mut cmd = Command::cargo_bin("opencga").expect("binary should build");
    for var in [
        "OPENCGA_HOST",
        "OPENCGA_API_VERSION",
        "OPENCGA_TOKEN",
        "OPENCGA_TIMEOUT_SECS",
        "OPENCGA_CONFIG",
        "LOG_LEVEL",
        "LOG_OUTPUT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn host(server: &MockServer) -> String {
    format!("{}/opencga", server.uri())
}

fn family_response() -> serde_json::Value {
    serde_json::json!({
        "apiVersion": "v2",
        "events": [],
        "responses": [{
            "numResults": 1,
            "results": [{"id": "FAM1", "name": "Family one"}]
        }]
    })
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_no_subcommand() {
    opencga()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("A subcommand is required"));
}

#[test]
fn test_list_categories() {
    opencga()
        .arg("endpoints")
        .assert()
        .success()
        .stdout(predicate::str::contains("alignment"))
        .stdout(predicate::str::contains("analysis/clinical"))
        .stdout(predicate::str::contains("families"))
        .stdout(predicate::str::contains("ga4gh"));
}

#[test]
fn test_list_category_endpoints() {
    opencga()
        .args(["endpoints", "families"])
        .assert()
        .success()
        .stdout(predicate::str::contains("update_annotations"))
        .stdout(predicate::str::contains(
            "families/{family}/annotationSets/{annotationSet}/annotations/update",
        ))
        .stdout(predicate::str::contains("DELETE"));
}

#[test]
fn test_unknown_category() {
    opencga()
        .args(["endpoints", "variants"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'variants'"));
}

// ============================================================================
// Dry runs
// ============================================================================

#[test]
fn test_dry_run_prints_request() {
    opencga()
        .args([
            "--host",
            "http://localhost:8080/opencga",
            "call",
            "alignment",
            "run_stats",
            "--arg",
            "file=HG00096.bam",
            "--param",
            "study=user@1000g:phase1",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"method\": \"POST\""))
        .stdout(predicate::str::contains(
            "http://localhost:8080/opencga/webservices/rest/v2/analysis/alignment/stats/run",
        ))
        .stdout(predicate::str::contains("\"file\": \"HG00096.bam\""))
        .stdout(predicate::str::contains("\"study\": \"user@1000g:phase1\""));
}

#[test]
fn test_dry_run_acl_path() {
    opencga()
        .args([
            "call",
            "clinical",
            "update_acl",
            "-a",
            "members=user1",
            "--body",
            r#"{"permissions": "VIEW", "action": "ADD"}"#,
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("analysis/clinical/acl/user1/update"))
        .stdout(predicate::str::contains("\"permissions\": \"VIEW\""));
}

#[test]
fn test_missing_argument() {
    opencga()
        .args(["call", "clinical", "update_comments", "-a", "clinicalAnalysis=CA1", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required argument 'interpretation'"));
}

#[test]
fn test_unknown_endpoint() {
    opencga()
        .args(["call", "alignment", "run_gatk", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown endpoint 'run_gatk'"));
}

#[test]
fn test_malformed_pair_rejected_by_parser() {
    opencga()
        .args(["call", "families", "info", "--arg", "FAM1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("NAME=VALUE"));
}

#[test]
fn test_invalid_body() {
    opencga()
        .args(["call", "families", "create", "--body", "{oops", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON body"));
}

// ============================================================================
// Live calls
// ============================================================================

#[tokio::test]
async fn test_call_prints_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/families/FAM1/info", REST_ROOT)))
        .and(query_param("study", "s1"))
        .and(header("Authorization", "Bearer t0k3n"))
        .respond_with(ResponseTemplate::new(200).set_body_json(family_response()))
        .expect(1)
        .mount(&server)
        .await;

    opencga()
        .args(["--host", &host(&server), "--token", "t0k3n"])
        .args(["call", "families", "info", "-a", "families=FAM1", "-p", "study=s1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"FAM1\""))
        .stdout(predicate::str::contains("Family one"));
}

#[tokio::test]
async fn test_call_with_body_file() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();
    let body_path = temp.path().join("family.json");
    fs::write(&body_path, r#"{"id": "FAM3", "members": [{"id": "NA12878"}]}"#).unwrap();

    Mock::given(method("POST"))
        .and(path(format!("{}/families/create", REST_ROOT)))
        .and(body_json(serde_json::json!({"id": "FAM3", "members": [{"id": "NA12878"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(family_response()))
        .expect(1)
        .mount(&server)
        .await;

    opencga()
        .args(["--host", &host(&server)])
        .args(["call", "families", "create", "--body"])
        .arg(format!("@{}", body_path.display()))
        .assert()
        .success();
}

#[tokio::test]
async fn test_call_reports_warnings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/families/search", REST_ROOT)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "events": [{"type": "WARNING", "message": "Deprecated parameter 'skipCount'"}],
            "responses": [{"numResults": 0, "results": []}]
        })))
        .mount(&server)
        .await;

    opencga()
        .args(["--host", &host(&server), "call", "families", "search"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Deprecated parameter 'skipCount'"));
}

#[tokio::test]
async fn test_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/analysis/clinical/CA404/info", REST_ROOT)))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "events": [{"type": "ERROR", "message": "Clinical analysis 'CA404' not found"}]
        })))
        .mount(&server)
        .await;

    opencga()
        .args(["--host", &host(&server)])
        .args(["call", "clinical", "info", "-a", "clinicalAnalyses=CA404"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("HTTP 404"))
        .stderr(predicate::str::contains("Clinical analysis 'CA404' not found"));
}

// ============================================================================
// Ping and configuration
// ============================================================================

#[tokio::test]
async fn test_ping() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/meta/ping", REST_ROOT)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"responses": []})))
        .mount(&server)
        .await;

    opencga()
        .args(["--host", &host(&server), "ping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is reachable"));
}

#[tokio::test]
async fn test_ping_unreachable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/meta/ping", REST_ROOT)))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    opencga()
        .args(["--host", &host(&server), "ping"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not reachable"));
}

#[test]
fn test_config_show_masks_token() {
    opencga()
        .env("OPENCGA_TOKEN", "supersecret")
        .args(["--host", "https://ws.example.org/opencga", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://ws.example.org/opencga"))
        .stdout(predicate::str::contains("supe****"))
        .stdout(predicate::str::contains("supersecret").not());
}

#[test]
fn test_config_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("opencga.yml");
    fs::write(
        &config_path,
        "host: https://demo.example.org/opencga/\nversion: v3\ntimeoutSecs: 30\n",
    )
    .unwrap();

    opencga()
        .arg("--config")
        .arg(&config_path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://demo.example.org/opencga/webservices/rest/v3",
        ))
        .stdout(predicate::str::contains("30"));
}

#[test]
fn test_invalid_host() {
    opencga()
        .args(["--host", "localhost:8080", "ping"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must start with http://"));
}
