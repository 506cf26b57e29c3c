mod common;

use common::{CLEAN_MESSAGE, ONE_ERROR_MESSAGE, TWO_ERROR_MESSAGE, TestFixture};
use predicates::prelude::*;

#[test]
fn clean_message_file_exits_success() {
    let fixture = TestFixture::new();
    fixture.create_file("COMMIT_EDITMSG", CLEAN_MESSAGE);

    commit_guard!()
        .current_dir(fixture.path())
        .args(["--message-file", "COMMIT_EDITMSG"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Finished checking commit messages"));
}

#[test]
fn failing_message_file_exits_with_count() {
    let fixture = TestFixture::new();
    fixture.create_file("COMMIT_EDITMSG", TWO_ERROR_MESSAGE);

    commit_guard!()
        .current_dir(fixture.path())
        .args(["--message-file", "COMMIT_EDITMSG"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("2 errors in this commit message."))
        .stderr(predicate::str::contains("Checking message").not());
}

#[test]
fn git_comments_are_ignored() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "COMMIT_EDITMSG",
        "Add the login form\n\n\
         # Please enter the commit message for your changes.\n\
         # Lines starting with '#' will be ignored.\n",
    );

    commit_guard!()
        .current_dir(fixture.path())
        .args(["--message-file", "COMMIT_EDITMSG"])
        .assert()
        .success();
}

#[test]
fn text_below_scissors_is_ignored() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "COMMIT_EDITMSG",
        "Add the login form\n\
         # ------------------------ >8 ------------------------\n\
         diff --git a/src/login.rs b/src/login.rs\n\
         +    let this_line_is_far_too_long_to_be_part_of_any_commit_message_body_at_all = 1;\n",
    );

    commit_guard!()
        .current_dir(fixture.path())
        .args(["--message-file", "COMMIT_EDITMSG"])
        .assert()
        .success();
}

#[test]
fn whitespace_git_cleans_up_is_ignored() {
    let fixture = TestFixture::new();
    fixture.create_file("COMMIT_EDITMSG", "Fix bug  \n\nBody line   \n   \n");

    commit_guard!()
        .current_dir(fixture.path())
        .args(["--message-file", "COMMIT_EDITMSG"])
        .assert()
        .success()
        .stderr(predicate::str::contains("UNTRIMMED_LINE").not());
}

#[test]
fn leading_and_repeated_blank_lines_are_ignored() {
    commit_guard!()
        .args(["--message-file", "-"])
        .write_stdin("\n\nAdd the login form\n\n\n\nIt validates input on submit.\n\n")
        .assert()
        .success();
}

#[test]
fn leading_whitespace_is_still_reported() {
    commit_guard!()
        .args(["--message-file", "-"])
        .write_stdin("Add the login form\n\n  It validates input on submit.\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error [UNTRIMMED_LINE]"));
}

#[test]
fn message_from_stdin() {
    commit_guard!()
        .args(["--message-file", "-"])
        .write_stdin(ONE_ERROR_MESSAGE)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error [INVALID_ENDING_PUNCTUATION]"));
}

#[test]
fn message_file_json() {
    let fixture = TestFixture::new();
    fixture.create_file("msg", ONE_ERROR_MESSAGE);

    let output = commit_guard!()
        .current_dir(fixture.path())
        .args(["--message-file", "msg", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["commit"].is_null());
    assert_eq!(value["summary"]["errors"], 1);
}

#[test]
fn missing_message_file_is_runtime_error() {
    let fixture = TestFixture::new();

    commit_guard!()
        .current_dir(fixture.path())
        .args(["--message-file", "nope.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("✖ IO: Failed to read file: nope.txt"));
}

#[test]
fn message_file_conflicts_with_full() {
    commit_guard!()
        .args(["--message-file", "msg", "--full"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
