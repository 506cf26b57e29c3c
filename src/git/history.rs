use std::path::{Path, PathBuf};

use crate::{CommitGuardError, Result};

use super::{Commit, CommitSource};

/// Commit history of a git repository, read with gix.
pub struct GitHistory {
    repo_path: PathBuf,
    base_ref: String,
}

impl GitHistory {
    /// Open the repository containing `path`. The merge-base is computed
    /// between `HEAD` and `base_ref`.
    ///
    /// # Errors
    /// Returns an error if no git repository is found.
    pub fn discover(path: &Path, base_ref: impl Into<String>) -> Result<Self> {
        let repo = gix::discover(path)
            .map_err(|e| CommitGuardError::Git(format!("Failed to discover git repository: {e}")))?;
        Ok(Self {
            repo_path: repo.path().to_path_buf(),
            base_ref: base_ref.into(),
        })
    }

    fn open_repo(&self) -> Result<gix::Repository> {
        gix::open(&self.repo_path)
            .map_err(|e| CommitGuardError::Git(format!("Failed to open git repository: {e}")))
    }

    fn resolve_commit<'repo>(repo: &'repo gix::Repository, rev: &str) -> Result<gix::Commit<'repo>> {
        repo.rev_parse_single(rev)
            .map_err(|e| CommitGuardError::Git(format!("Failed to parse reference '{rev}': {e}")))?
            .object()
            .map_err(|e| CommitGuardError::Git(format!("Failed to get object for '{rev}': {e}")))?
            .peel_to_commit()
            .map_err(|e| CommitGuardError::Git(format!("Failed to peel to commit '{rev}': {e}")))
    }

    /// Read the commit `steps_back` first-parent steps behind `HEAD`.
    ///
    /// # Errors
    /// Returns an error if the commit does not exist or cannot be read.
    pub fn read_commit(&self, steps_back: usize) -> Result<Commit> {
        let repo = self.open_repo()?;
        let commit = Self::resolve_commit(&repo, &format!("HEAD~{steps_back}"))?;
        let message = String::from_utf8_lossy(commit.message_raw_sloppy()).into_owned();
        Ok(Commit::new(commit.id.to_string(), message))
    }

    /// Compute the merge-base of `HEAD` and the base reference.
    ///
    /// # Errors
    /// Returns an error if either reference is missing or the histories are unrelated.
    pub fn read_merge_base(&self) -> Result<String> {
        let repo = self.open_repo()?;
        let head = Self::resolve_commit(&repo, "HEAD")?;
        let base = Self::resolve_commit(&repo, &self.base_ref)?;
        let merge_base = repo.merge_base(head.id, base.id).map_err(|e| {
            CommitGuardError::Git(format!(
                "Failed to find merge-base of HEAD and '{}': {e}",
                self.base_ref
            ))
        })?;
        Ok(merge_base.to_string())
    }
}

impl CommitSource for GitHistory {
    fn commit(&self, steps_back: usize) -> Option<Commit> {
        self.read_commit(steps_back).ok()
    }

    fn merge_base(&self) -> Option<String> {
        self.read_merge_base().ok()
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
