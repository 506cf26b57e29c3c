use std::path::PathBuf;

use clap::Parser;
use commit_guard::cli::Cli;
use commit_guard::config::Config;
use commit_guard::{CommitGuardError, EXIT_RUNTIME_ERROR, EXIT_SUCCESS};
use tempfile::TempDir;

use crate::{read_message, walk_options};

#[test]
fn exit_codes_documented() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_RUNTIME_ERROR, 2);
}

#[test]
fn read_message_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("COMMIT_EDITMSG");
    std::fs::write(&path, "Fix bug\n\n# comment\n").unwrap();

    assert_eq!(read_message(&path).unwrap(), "Fix bug\n\n# comment\n");
}

#[test]
fn read_message_missing_file_is_file_read_error() {
    let err = read_message(&PathBuf::from("/nonexistent/COMMIT_EDITMSG")).unwrap_err();

    assert!(matches!(err, CommitGuardError::FileRead { .. }));
    assert_eq!(err.error_type(), "IO");
    assert!(err.detail().is_some());
}

#[test]
fn walk_options_take_full_from_cli_and_limit_from_config() {
    let cli = Cli::parse_from(["commit-guard", "--full"]);
    let config = Config::default().with_overrides(None, Some(12));

    let options = walk_options(&cli, &config);

    assert!(options.full_mode);
    assert_eq!(options.limit, 12);
}

