//! End-to-end roster listing tests against mocked backend services.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_sign_in(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "u-1",
            "email": "a@b.com",
            "idToken": "tok",
            "refreshToken": "refresh",
        })))
        .mount(server)
        .await;
}

fn list_cmd(server: &MockServer, home: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("rota");
    cmd.env("ROTA_HOME", home)
        .env("FIREBASE_API_KEY", "test-key")
        .env("FIREBASE_IDENTITY_URL", server.uri())
        .env("FIREBASE_DATABASE_URL", server.uri())
        .args(["employees", "list", "--email", "a@b.com", "--password", "pw"]);
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_prints_roster_rows() {
    let server = MockServer::start().await;
    mount_sign_in(&server).await;
    Mock::given(method("GET"))
        .and(path("/users/u-1/employees.json"))
        .and(query_param("auth", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "-Na": {
                "employeeName": "Dana",
                "phone": "555-0101",
                "shift": "Friday",
                "uid": "u-1",
            },
            "-Nb": {
                "employeeName": "Reza",
                "phone": "555-0102",
                "shift": "Monday",
                "uid": "u-1",
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempdir().unwrap();
    list_cmd(&server, home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dana"))
        .stdout(predicate::str::contains("Friday"))
        .stdout(predicate::str::contains("Reza"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_handles_missing_collection() {
    let server = MockServer::start().await;
    mount_sign_in(&server).await;
    Mock::given(method("GET"))
        .and(path("/users/u-1/employees.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .mount(&server)
        .await;

    let home = tempdir().unwrap();
    list_cmd(&server, home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No employees found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_fails_when_login_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "INVALID_PASSWORD" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/accounts:signUp"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "EMAIL_EXISTS" }
        })))
        .mount(&server)
        .await;

    let home = tempdir().unwrap();
    list_cmd(&server, home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed."));
}
