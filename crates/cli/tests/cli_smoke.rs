use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    Command::cargo_bin("clarify")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("sheet"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("portal"));
}

#[test]
fn test_chat_without_setup_args_fails_fast() {
    Command::cargo_bin("clarify")
        .unwrap()
        .arg("chat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url and --collection are required"));
}

#[test]
fn test_sheet_rejects_short_id_locally() {
    Command::cargo_bin("clarify")
        .unwrap()
        .args(["sheet", "--sheet-id", "abcdefghij", "--api-key", "sk-0123456789abcdef0123456789"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid sheet id"));
}
