//! CLI integration tests.
//!
//! These exercise the fatal configuration paths, which abort before the
//! countdown starts and before any audio device is opened.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with HOME pointed at a fresh directory so the user's real
/// config file cannot leak into the test.
fn hiit(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hiit").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn test_missing_required_arguments_fail() {
    let home = TempDir::new().unwrap();
    hiit(&home)
        .args(["-r", "3", "-e", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_non_numeric_rounds_fail_with_no_display_output() {
    let home = TempDir::new().unwrap();
    hiit(&home)
        .args(["-r", "three", "-e", "5", "-d", "30"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_zero_rounds_fail_before_the_countdown() {
    let home = TempDir::new().unwrap();
    hiit(&home)
        .args(["-r", "0", "-e", "5", "-d", "30"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("at least one round"));
}

#[test]
fn test_malformed_config_file_is_fatal() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".hiit");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("config.yaml"), "workout: [not a map").unwrap();

    hiit(&home)
        .args(["-r", "1", "-e", "1", "-d", "0", "--silent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

#[test]
fn test_help_describes_the_timer() {
    let home = TempDir::new().unwrap();
    hiit(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("interval workout timer"));
}

#[test]
fn test_completions_subcommand_works_without_workout_flags() {
    let home = TempDir::new().unwrap();
    hiit(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hiit"));
}
