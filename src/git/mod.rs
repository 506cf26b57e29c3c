mod history;
mod message;

pub use history::GitHistory;
pub use message::{SCISSORS_LINE, cleanup_message};

/// A commit under review. Identity is the full hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    pub message: String,
}

impl Commit {
    #[must_use]
    pub fn new(hash: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
        }
    }
}

/// Source of commits walking back from the current position.
///
/// Implementations never report errors: any failure to retrieve a commit is
/// indistinguishable from reaching the end of history.
pub trait CommitSource {
    /// The commit `steps_back` first-parent steps behind `HEAD`.
    fn commit(&self, steps_back: usize) -> Option<Commit>;

    /// Hash of the merge-base between `HEAD` and the base reference.
    fn merge_base(&self) -> Option<String>;
}
