use std::path::{Path, PathBuf};

use crate::error::{CommitGuardError, Result};

use super::Config;
use super::model::CONFIG_FILE_NAME;

/// Source of the tool configuration.
pub trait ConfigLoader {
    /// Load `.commit-guard.toml` from the current directory, or the defaults
    /// when there is no such file.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a file named on the command line.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Filesystem access needed by the loader, replaceable in tests.
pub trait FileSystem {
    /// Read a whole file as UTF-8.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Whether a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Directory the local config file is looked up in.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

/// `std::fs` backed filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Reads `.commit-guard.toml` through a [`FileSystem`].
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    fn read_config(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| CommitGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(toml::from_str(&content)?)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        match self.local_config_path() {
            Some(path) if self.fs.exists(&path) => self.read_config(&path),
            _ => Ok(Config::default()),
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !self.fs.exists(path) {
            return Err(CommitGuardError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        self.read_config(path)
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
