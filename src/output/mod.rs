mod error_output;
mod json;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::diagnostic::Diagnostic;
use crate::error::Result;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stderr is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolve the mode against the environment of the error stream.
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                // Respect NO_COLOR environment variable (https://no-color.org/)
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stderr())
            }
        }
    }
}

/// ANSI escape codes
pub(crate) mod ansi {
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";
    pub const RESET: &str = "\x1b[0m";
}

/// Everything a formatter needs to report on one commit message.
#[derive(Debug, Clone, Copy)]
pub struct MessageReport<'a> {
    /// Full commit hash, absent when checking a message file.
    pub commit: Option<&'a str>,
    pub message: &'a str,
    pub diagnostics: &'a [Diagnostic],
}

/// Trait for formatting a message report into an output format.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &MessageReport<'_>) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
