use serde::{Deserialize, Serialize};

/// Name of the configuration file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".commit-guard.toml";

/// Reference the merge-base is computed against when none is configured.
pub const DEFAULT_BASE_REF: &str = "main";

/// Number of commits examined when no limit is configured.
pub const DEFAULT_LIMIT: usize = 500;

/// Contents of `.commit-guard.toml`. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Branch or commit the merge-base with `HEAD` is computed against.
    #[serde(default = "default_base_ref")]
    pub base_ref: String,

    /// Maximum number of commits examined.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_ref: default_base_ref(),
            limit: default_limit(),
        }
    }
}

impl Config {
    /// Apply command-line overrides, which take precedence over the file.
    #[must_use]
    pub fn with_overrides(mut self, base_ref: Option<&str>, limit: Option<usize>) -> Self {
        if let Some(base_ref) = base_ref {
            self.base_ref = base_ref.to_string();
        }
        if let Some(limit) = limit {
            self.limit = limit;
        }
        self
    }
}

fn default_base_ref() -> String {
    DEFAULT_BASE_REF.to_string()
}

const fn default_limit() -> usize {
    DEFAULT_LIMIT
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
