//! Binary tests

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

/// `cshare` isolated from the user's config and environment
fn cshare(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cshare").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("CSHARE_API_URL")
        .env_remove("CSHARE_IDENTITY_URL")
        .env_remove("CSHARE_COUNTRY")
        .env_remove("CSHARE_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let home = TempDir::new().unwrap();
    cshare(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("verify"));
}

#[test]
fn test_submit_without_backend_url_fails() {
    let home = TempDir::new().unwrap();
    cshare(&home)
        .arg("submit")
        .write_stdin("print(1)")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No backend URL configured"));
}

#[test]
fn test_submit_blank_input_shows_notice() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    let optimize = server.mock(|when, then| {
        when.method(POST).path("/code");
        then.status(500);
    });

    cshare(&home)
        .args(["submit", "--api-url", &server.base_url()])
        .write_stdin("   \n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter some code to submit"));

    optimize.assert_hits(0);
}

#[test]
fn test_submit_file_prints_comparison() {
    let home = TempDir::new().unwrap();
    let source = home.path().join("snippet.py");
    fs::write(&source, "print(1)\n").unwrap();

    let server = MockServer::start();
    let optimize = server.mock(|when, then| {
        when.method(POST)
            .path("/code")
            .json_body(json!({"code": "print(1)\n", "country": "Canada"}));
        then.status(200).json_body(json!({
            "after_code": "print(1)",
            "before_carbon": 10.26,
            "after_carbon": 3.04,
            "code_id": "abc"
        }));
    });
    let sharing = server.mock(|when, then| {
        when.method(POST).path("/sharing");
        then.status(200).json_body(json!({"success": 200}));
    });

    // no terminal attached, so the publish prompt falls back to private
    cshare(&home)
        .env("CSHARE_API_URL", server.base_url())
        .args(["submit", "--country", "Canada"])
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("print(1)"))
        .stdout(predicate::str::contains("10.3"))
        .stdout(predicate::str::contains("3.0"));

    optimize.assert();
    sharing.assert_hits(0);
}

#[test]
fn test_submit_failure_shows_notice() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/code");
        then.status(503);
    });

    cshare(&home)
        .args(["submit", "--api-url", &server.base_url(), "-"])
        .write_stdin("print(1)")
        .assert()
        .success()
        .stderr(predicate::str::contains("Problem while submitting the code"));
}

#[test]
fn test_config_file_supplies_backend() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    let optimize = server.mock(|when, then| {
        when.method(POST).path("/code");
        then.status(200).json_body(json!({
            "after_code": "x = 1",
            "before_carbon": 1.0,
            "after_carbon": 0.5,
            "code_id": 9
        }));
    });
    let config = home.path().join("cshare.toml");
    fs::write(&config, format!("api_url = \"{}\"\n", server.base_url())).unwrap();

    cshare(&home)
        .arg("--config")
        .arg(&config)
        .arg("submit")
        .write_stdin("x = 1")
        .assert()
        .success()
        .stdout(predicate::str::contains("x = 1"));

    optimize.assert();
}

#[test]
fn test_verify_reports_missing_user() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/ghost-user-404");
        then.status(404);
    });

    cshare(&home)
        .env("CSHARE_IDENTITY_URL", server.base_url())
        .args(["verify", "ghost-user-404"])
        .assert()
        .success()
        .stderr(predicate::str::contains("could not be verified"));
}

#[test]
fn test_verify_reports_known_user() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/octocat");
        then.status(200).json_body(json!({"login": "octocat"}));
    });

    cshare(&home)
        .env("CSHARE_IDENTITY_URL", server.base_url())
        .args(["verify", "octocat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is a valid GitHub ID"));
}
