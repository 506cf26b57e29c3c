use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    #[must_use]
    pub const fn mode(self) -> ColorMode {
        match self {
            Self::Auto => ColorMode::Auto,
            Self::Always => ColorMode::Always,
            Self::Never => ColorMode::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "commit-guard")]
#[command(author, version, about = "Commit message guard - enforce commit message style")]
#[command(long_about = "Checks the commit messages on the current branch, walking back from HEAD \
    until the merge-base with the base reference.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    N - Number of problems in the first failing commit message (at most 255)\n  \
    2 - Configuration or runtime error\n\n\
    Any non-zero exit code means failure.")]
pub struct Cli {
    /// Check up to <LIMIT> commits regardless of the merge-base
    #[arg(long)]
    pub full: bool,

    /// Maximum number of commits to check [default: 500, or `limit` from config]
    pub limit: Option<usize>,

    /// Reference to compute the merge-base against (overrides `base_ref` from config)
    #[arg(long, value_name = "REF")]
    pub base: Option<String>,

    /// Check a single message read from a file ('-' for stdin) instead of walking history
    #[arg(long, value_name = "PATH", conflicts_with_all = ["full", "limit", "base"])]
    pub message_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
