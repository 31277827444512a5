use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    cargo_bin_cmd!("rota")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("employees"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_login_requires_credentials() {
    cargo_bin_cmd!("rota")
        .env_remove("ROTA_EMAIL")
        .env_remove("ROTA_PASSWORD")
        .arg("login")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--email"));
}

#[test]
fn test_employees_help_shows_list() {
    cargo_bin_cmd!("rota")
        .args(["employees", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"));
}
