//! Exit codes and error messages.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn abacus() -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("abacus");
    // stdout is a pipe here, so output is already plain
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn division_by_zero_is_a_user_error() {
    abacus()
        .args(["5", "/", "0"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Cannot divide by zero"));
}

#[test]
fn compound_expression_is_rejected() {
    abacus()
        .arg("5! + 2")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid expression"));
}

#[test]
fn unknown_function_is_a_user_error() {
    abacus()
        .arg("foo(2)")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("foo"));
}

#[test]
fn factorial_of_fraction_fails() {
    abacus().arg("2.5!").assert().failure().code(2);
}

#[test]
fn last_with_empty_history_is_not_found() {
    abacus()
        .arg("last")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No calculations in history"));
}

#[test]
fn gui_is_not_available() {
    abacus()
        .arg("--gui")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Feature not available"));
}

#[test]
fn unknown_config_key_is_a_configuration_error() {
    abacus()
        .args(["config", "get", "nope"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    abacus()
        .arg("--config")
        .arg(temp.path().join("missing.toml"))
        .arg("1 + 1")
        .assert()
        .failure()
        .code(4);
}

#[test]
fn malformed_config_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("bad.toml");
    fs::write(&config, "[calculator]\nangle_unit = \"gradians\"\n").unwrap();

    abacus()
        .arg("--config")
        .arg(&config)
        .arg("1 + 1")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn verbose_error_omits_hint() {
    abacus()
        .args(["-v", "5", "/", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--verbose").not());
}

#[test]
fn quiet_and_verbose_conflict() {
    abacus()
        .args(["--quiet", "--verbose", "1 + 1"])
        .assert()
        .failure()
        .code(2);
}
