//! Walks commit history from `HEAD` and checks each commit message.
//!
//! The walk stops at the first commit with violations. The outcome is
//! returned as a value; translating it into a process exit code happens in
//! `main`.

use std::io::Write;

use crate::checker::run_checks;
use crate::config::DEFAULT_LIMIT;
use crate::diagnostic::Diagnostic;
use crate::error::Result;
use crate::git::CommitSource;
use crate::output::{
    ColorMode, JsonFormatter, MessageReport, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::{EXIT_SUCCESS, MAX_EXIT_CODE};

/// Result of walking the commit range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkOutcome {
    /// Every examined commit passed.
    Clean { checked: usize },
    /// The walk stopped at a commit with `count` diagnostics.
    Violations { commit: String, count: usize },
}

impl WalkOutcome {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Clean { .. } => EXIT_SUCCESS,
            Self::Violations { count, .. } => exit_code_for(*count),
        }
    }
}

/// Exit code for a diagnostic count, saturated so it never wraps to 0.
#[must_use]
pub fn exit_code_for(count: usize) -> i32 {
    i32::try_from(count).map_or(MAX_EXIT_CODE, |code| code.min(MAX_EXIT_CODE))
}

/// How diagnostics and progress are reported.
pub struct Reporter {
    format: OutputFormat,
    text: TextFormatter,
    quiet: bool,
    verbose: u8,
}

impl Reporter {
    #[must_use]
    pub fn new(format: OutputFormat, color: ColorMode) -> Self {
        Self {
            format,
            text: TextFormatter::new(color),
            quiet: false,
            verbose: 0,
        }
    }

    /// Reporter with explicit color control (for testing).
    #[must_use]
    pub const fn with_colors(format: OutputFormat, use_colors: bool) -> Self {
        Self {
            format,
            text: TextFormatter::with_colors(use_colors),
            quiet: false,
            verbose: 0,
        }
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub const fn verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    fn progress<E: Write>(&self, err: &mut E, line: &str) -> Result<()> {
        if !self.quiet {
            writeln!(err, "{line}")?;
            err.flush()?;
        }
        Ok(())
    }

    fn detail<E: Write>(&self, err: &mut E, line: &str) -> Result<()> {
        if self.verbose > 0 && !self.quiet {
            writeln!(err, "{line}")?;
            err.flush()?;
        }
        Ok(())
    }

    /// Render the diagnostics of one message. Text goes to `err`, JSON to
    /// `out`. Nothing is written for a clean message.
    ///
    /// # Errors
    /// Returns an error if formatting or writing fails.
    pub fn report<E: Write, O: Write>(
        &self,
        err: &mut E,
        out: &mut O,
        report: &MessageReport<'_>,
    ) -> Result<()> {
        if report.diagnostics.is_empty() {
            return Ok(());
        }
        match self.format {
            OutputFormat::Text => {
                write!(err, "{}", self.text.format(report)?)?;
                err.flush()?;
            }
            OutputFormat::Json => {
                writeln!(out, "{}", JsonFormatter.format(report)?)?;
                out.flush()?;
            }
        }
        Ok(())
    }
}

/// Walk configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// Ignore the merge-base boundary.
    pub full_mode: bool,
    /// Maximum number of commits examined.
    pub limit: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            full_mode: false,
            limit: DEFAULT_LIMIT,
        }
    }
}

pub struct CommitWalker<'a, S: CommitSource> {
    source: &'a S,
    options: WalkOptions,
    reporter: &'a Reporter,
}

impl<'a, S: CommitSource> CommitWalker<'a, S> {
    #[must_use]
    pub const fn new(source: &'a S, options: WalkOptions, reporter: &'a Reporter) -> Self {
        Self {
            source,
            options,
            reporter,
        }
    }

    /// Check commits from `HEAD` backwards until the limit, the end of
    /// history, or (outside full mode) the merge-base is reached.
    ///
    /// # Errors
    /// Returns an error only if writing output fails.
    pub fn walk<E: Write, O: Write>(&self, err: &mut E, out: &mut O) -> Result<WalkOutcome> {
        let boundary = if self.options.full_mode {
            self.reporter.detail(err, "Full mode: ignoring merge-base")?;
            None
        } else {
            let merge_base = self.source.merge_base();
            match &merge_base {
                Some(hash) => self
                    .reporter
                    .detail(err, &format!("Stopping at merge-base {hash}"))?,
                None => self.reporter.detail(
                    err,
                    &format!("No merge-base found; checking up to {} commits", self.options.limit),
                )?,
            }
            merge_base
        };

        let mut checked = 0;
        for steps_back in 0..self.options.limit {
            let Some(commit) = self.source.commit(steps_back) else {
                break;
            };
            if boundary.as_deref() == Some(commit.hash.as_str()) {
                break;
            }

            self.reporter.progress(
                err,
                &self.reporter.text.checking_line(&commit.hash, &commit.message),
            )?;
            let diagnostics = run_checks(&commit.message);
            checked += 1;

            if !diagnostics.is_empty() {
                self.report(err, out, Some(&commit.hash), &commit.message, &diagnostics)?;
                return Ok(WalkOutcome::Violations {
                    commit: commit.hash,
                    count: diagnostics.len(),
                });
            }
        }

        self.reporter
            .detail(err, &format!("Checked {checked} commit{}", plural(checked)))?;
        self.reporter.progress(err, &self.reporter.text.finished_line())?;
        Ok(WalkOutcome::Clean { checked })
    }

    fn report<E: Write, O: Write>(
        &self,
        err: &mut E,
        out: &mut O,
        commit: Option<&str>,
        message: &str,
        diagnostics: &[Diagnostic],
    ) -> Result<()> {
        let report = MessageReport {
            commit,
            message,
            diagnostics,
        };
        self.reporter.report(err, out, &report)
    }
}

/// Check a single message that is not (yet) a commit, as in a commit-msg
/// hook. Returns the number of diagnostics.
///
/// # Errors
/// Returns an error if writing output fails.
pub fn check_message<E: Write, O: Write>(
    reporter: &Reporter,
    message: &str,
    err: &mut E,
    out: &mut O,
) -> Result<usize> {
    let diagnostics = run_checks(message);
    let report = MessageReport {
        commit: None,
        message,
        diagnostics: &diagnostics,
    };
    reporter.report(err, out, &report)?;
    if diagnostics.is_empty() {
        reporter.progress(err, &reporter.text.finished_line())?;
    }
    Ok(diagnostics.len())
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
