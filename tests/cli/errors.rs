//! Tests for argument handling and general CLI behavior.

use predicates::prelude::*;

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("init"));
    assert!(out.contains("hook"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_hook_requires_deployment_and_route() {
    let t = Test::new();

    t.cmd()
        .args(["hook", "app.example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<ROUTE>"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_verbose_flag_accepted_after_command() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["init", "--target", "nope", "--verbose"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid target: nope");
}

#[test]
fn test_completions() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tgvercel"));
}

#[test]
fn test_local_requires_token() {
    let t = Test::new();

    let output = t.cmd().arg("local").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "--telegram-token or TELEGRAM_TOKEN");
}

#[test]
fn test_serve_rejects_bad_address() {
    let t = Test::new();

    t.cmd()
        .args(["serve", "--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bind"));
}
