#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the commit-guard binary.
#[macro_export]
macro_rules! commit_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("commit-guard"))
    };
}

/// Subject and body that pass every check.
pub const CLEAN_MESSAGE: &str = "Add the login form\n\nIt validates input on submit.";

/// Fails only the terminal punctuation check.
pub const ONE_ERROR_MESSAGE: &str = "Fix the login bug.";

/// Fails the punctuation and leading-character checks.
pub const TWO_ERROR_MESSAGE: &str = "added login form.";

/// A temporary git repository whose default branch is `main`.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates an empty temp directory that is not a git repository.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates an empty repository on branch `main`.
    pub fn git_repo() -> Self {
        let fixture = Self::new();
        fixture.git(&["init"]);
        fixture.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        fixture.git(&["config", "user.email", "test@test.com"]);
        fixture.git(&["config", "user.name", "Test User"]);
        fixture.git(&["config", "commit.gpgsign", "false"]);
        fixture
    }

    /// Runs git in the fixture and returns trimmed stdout.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("git output is UTF-8")
            .trim()
            .to_string()
    }

    /// Records an empty commit with the message kept verbatim. Returns its hash.
    pub fn commit(&self, message: &str) -> String {
        self.git(&["commit", "--allow-empty", "--cleanup=verbatim", "-m", message]);
        self.git(&["rev-parse", "HEAD"])
    }

    /// Starts branch `name` at the current commit and switches to it.
    pub fn branch(&self, name: &str) {
        self.git(&["checkout", "-q", "-b", name]);
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a `.commit-guard.toml` config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".commit-guard.toml", content);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
