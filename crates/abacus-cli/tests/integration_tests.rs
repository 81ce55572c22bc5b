//! Integration tests for abacus-cli.

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
fn test_help_flag() {
    abacus()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--angle-unit"));
}

#[test]
fn test_version_flag() {
    abacus()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── batch mode ────────────────────────────────────────────────────────────────

#[test]
fn test_batch_addition() {
    abacus()
        .args(["2", "+", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 + 3 = 5"));
}

#[test]
fn test_batch_single_quoted_expression() {
    abacus()
        .arg("20% of 150")
        .assert()
        .success()
        .stdout(predicate::str::contains("20% of 150 = 30"));
}

#[test]
fn test_batch_reference_expressions() {
    for (input, expected) in [
        ("sqrt(16)", "√16 = 4"),
        ("5!", "5! = 120"),
        ("sin(90)", "sin(90°) = 1"),
        ("2 ** 10", "2 ^ 10 = 1024"),
        ("log(100, 10)", "log_10(100) = 2"),
    ] {
        abacus()
            .arg(input)
            .assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }
}

#[test]
fn test_batch_negative_operand() {
    abacus()
        .args(["-4", "*", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-4 × 2 = -8"));
}

#[test]
fn test_batch_radians_flag() {
    abacus()
        .args(["--angle-unit", "radians", "cos(0)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cos(0 rad) = 1"));
}

#[test]
fn test_batch_json_output() {
    abacus()
        .args(["--output-format", "json", "3 * 4"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"sequence":1,"expression":"3 × 4","result":12.0}"#,
        ));
}

#[test]
fn test_batch_help_command() {
    abacus()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sqrt(x)"))
        .stdout(predicate::str::contains("quit, exit"));
}

// ── REPL over piped stdin ─────────────────────────────────────────────────────

#[test]
fn test_repl_session() {
    abacus()
        .write_stdin("2 + 3\nsqrt(25)\nhistory\nclear\nhistory\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 + 3 = 5"))
        .stdout(predicate::str::contains("1. 2 + 3 = 5"))
        .stdout(predicate::str::contains("2. √25 = 5"))
        .stdout(predicate::str::contains("History cleared"))
        .stdout(predicate::str::contains("History is empty"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_repl_no_prompt_when_piped() {
    abacus()
        .write_stdin("1 + 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("calc>").not());
}

#[test]
fn test_repl_recovers_from_errors() {
    abacus()
        .write_stdin("5 / 0\nhello world\nlast\n4!\nlast\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cannot divide by zero"))
        .stdout(predicate::str::contains("Invalid expression"))
        .stdout(predicate::str::contains("No calculations in history"))
        .stdout(predicate::str::contains("4! = 24"));
}

#[test]
fn test_repl_blank_lines_and_eof() {
    abacus()
        .write_stdin("\n   \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_repl_history_limit_from_config() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("abacus.toml");
    fs::write(&config, "[calculator]\nhistory_display_limit = 1\n").unwrap();

    abacus()
        .arg("--config")
        .arg(&config)
        .write_stdin("1 + 1\n2 + 2\nhistory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2. 2 + 2 = 4"))
        .stdout(predicate::str::contains("1. 1 + 1 = 2").not());
}

#[test]
fn test_repl_history_limit_zero_hides_everything() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("abacus.toml");
    fs::write(&config, "[calculator]\nhistory_display_limit = 0\n").unwrap();

    abacus()
        .arg("--config")
        .arg(&config)
        .write_stdin("1 + 1\n2 + 2\nhistory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 older entries not shown)"))
        .stdout(predicate::str::contains("History is empty").not());
}

#[test]
fn test_repl_json_mode_emits_only_json() {
    let assert = abacus()
        .args(["--output-format", "json"])
        .write_stdin("2 + 3\nbogus\nhistory\nhelp\nclear\nhistory\nquit\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 6, "unexpected output: {stdout}");
    for line in &lines {
        serde_json::from_str::<serde_json::Value>(line)
            .unwrap_or_else(|e| panic!("not JSON ({e}): {line}"));
    }
    assert!(lines.contains(&r#"{"status":"cleared"}"#));
    assert_eq!(lines[5], "[]");
}

#[test]
fn test_double_verbose_logs_recorded_calculation() {
    abacus()
        .args(["-vv", "6 * 7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 × 7 = 42"))
        .stderr(predicate::str::contains("Calculation recorded"));
}

#[test]
fn test_single_verbose_omits_calculations() {
    abacus()
        .args(["-v", "6 * 7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Batch evaluation"))
        .stderr(predicate::str::contains("Calculation recorded").not());
}

#[test]
fn test_batch_compound_expression() {
    abacus()
        .arg("2 + 3 * 4")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 + 3 * 4 = 14"));
}

#[test]
fn test_batch_overflow_is_user_error() {
    abacus()
        .arg("1e308 * 10")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("too large to represent"));
}

// ── subcommands ───────────────────────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    abacus()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abacus"));
}

#[test]
fn test_config_list() {
    abacus()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[calculator]"))
        .stdout(predicate::str::contains("angle_unit = \"degrees\""));
}

#[test]
fn test_config_get_from_env() {
    abacus()
        .args(["config", "get", "calculator.angle_unit"])
        .env("ABACUS__CALCULATOR__ANGLE_UNIT", "radians")
        .assert()
        .success()
        .stdout(predicate::str::contains("calculator.angle_unit = radians"));
}

#[test]
fn test_config_list_json() {
    let assert = abacus()
        .args(["--output-format", "json", "config", "list"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["calculator"]["angle_unit"], "degrees");
}

#[test]
fn test_config_path() {
    abacus()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}
