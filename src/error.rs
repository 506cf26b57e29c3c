use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommitGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(String),
}

impl CommitGuardError {
    /// Short category label used as the error type in terminal output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
            Self::Git(_) => "Git",
        }
    }

    /// Underlying cause worth showing on its own line, if the message does
    /// not already include it.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CommitGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
