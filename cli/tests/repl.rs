use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_repl_session_shows_result_in_prompt() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("repl")
        .write_stdin("digit 5\nop +\ndigit 2\nequals\nquit\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[7]"));
}

#[test]
fn test_repl_accepts_many_tokens_per_line() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("repl")
        .write_stdin("digit 5 op + digit 2 equals\nquit\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[7]"));
}

#[test]
fn test_repl_unknown_token_diagnoses_and_continues() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("repl").write_stdin("frobnicate\ndigit 4\nquit\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: frobnicate"))
        .stdout(predicate::str::contains("[4]"));
}

#[test]
fn test_repl_prompt_carries_pending_expression_and_memory() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("repl")
        .write_stdin("digit 8 ms op +\nquit\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(8 +) [8]  M=8"));
}

#[test]
fn test_repl_history_command() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("repl")
        .write_stdin("digit 9 unary sqrt\nhistory\nquit\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sqrt(9) = 3"));
}

#[test]
fn test_repl_ends_cleanly_at_eof() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("repl").write_stdin("digit 5\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[5]"));
}

#[test]
fn test_repl_error_display_until_cleared() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("repl")
        .write_stdin("digit 5 op / digit 0 equals\nsign\nclear\nquit\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[Error]"))
        .stdout(predicate::str::contains("[0]"));
}
