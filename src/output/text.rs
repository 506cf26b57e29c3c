//! Compiler-style terminal rendering of diagnostics.

use std::fmt::Write;

use crate::checker::subject;
use crate::diagnostic::{Diagnostic, GUTTER_WIDTH, Help, HelpSegment, Location, suggestion_block};
use crate::error::Result;

use super::{ColorMode, MessageReport, OutputFormatter, ansi};

/// Number of characters of the commit hash shown in progress lines.
const SHORT_HASH_LEN: usize = 10;

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(),
        }
    }

    /// Creates a formatter with explicit color control (for testing).
    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn paint(&self, text: &str, styles: &[&str]) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{}{text}{}", styles.concat(), ansi::RESET)
    }

    /// Progress line printed before a commit is checked.
    #[must_use]
    pub fn checking_line(&self, hash: &str, message: &str) -> String {
        let short = hash.get(..SHORT_HASH_LEN).unwrap_or(hash);
        let subject = format!("\"{}\"", subject(message).unwrap_or_default());
        format!(
            "{} message {} (commit {})",
            self.paint("Checking", &[ansi::BOLD, ansi::CYAN]),
            self.paint(&subject, &[ansi::BOLD, ansi::WHITE]),
            self.paint(short, &[ansi::BOLD, ansi::GREEN]),
        )
    }

    /// Line printed once every commit in range passed.
    #[must_use]
    pub fn finished_line(&self) -> String {
        format!(
            "{} checking commit messages",
            self.paint("Finished", &[ansi::BOLD, ansi::GREEN])
        )
    }

    fn format_group(&self, out: &mut String, group: &[&Diagnostic], lines: &[&str]) {
        let Some(first) = group.first() else {
            return;
        };
        let code = first
            .code
            .as_deref()
            .map(|code| format!(" [{code}]"))
            .unwrap_or_default();
        let header = format!("Error{code} - {}:", first.description);
        writeln!(out, "{}", self.paint(&header, &[ansi::BOLD, ansi::RED])).ok();
        writeln!(out).ok();

        for diag in group {
            if let Some(location) = &diag.location {
                self.format_location(out, lines, location, diag.hint.as_deref());
            }
            if let Some(help) = &diag.help {
                let label = self.paint("Help:", &[ansi::BOLD, ansi::GREEN]);
                writeln!(out, "{label} {}", self.format_help(help)).ok();
                writeln!(out).ok();
            }
            if let Some(note) = &diag.note {
                let label = self.paint("Note:", &[ansi::BOLD, ansi::MAGENTA]);
                writeln!(out, "{label} {note}").ok();
            }
        }

        writeln!(out).ok();
    }

    fn format_location(
        &self,
        out: &mut String,
        lines: &[&str],
        location: &Location,
        hint: Option<&str>,
    ) {
        let pad = " ".repeat(GUTTER_WIDTH);
        let row = location.line;

        // Up to two lines of context: an ellipsis, then the previous line.
        if row >= 2 {
            writeln!(out, "{pad}{}", self.paint("...", &[ansi::DIM])).ok();
        }
        if let Some(previous) = row.checked_sub(1).and_then(|i| lines.get(i)) {
            writeln!(out, "{pad}{}", self.paint(previous, &[ansi::DIM])).ok();
        }

        let line = lines.get(row).copied().unwrap_or_default();
        let (before, span, after) = split_columns(line, location);
        let start = before.chars().count();
        let end = start + span.chars().count();

        let label = format!("{:>GUTTER_WIDTH$}", format!("L{}: ", row + 1));
        writeln!(
            out,
            "{}{before}{}{after}",
            self.paint(&label, &[ansi::BOLD, ansi::CYAN]),
            self.paint(span, &[ansi::BOLD, ansi::RED]),
        )
        .ok();

        let carets = "^".repeat(end - start);
        writeln!(
            out,
            "{pad}{}{}",
            " ".repeat(start),
            self.paint(&carets, &[ansi::BOLD, ansi::RED])
        )
        .ok();

        if let Some(hint) = hint {
            let aligned = format!("{hint:>width$}", width = GUTTER_WIDTH + end);
            writeln!(out, "{}", self.paint(&aligned, &[ansi::BOLD, ansi::YELLOW])).ok();
        }
        writeln!(out).ok();
    }

    fn format_help(&self, help: &Help) -> String {
        help.segments()
            .iter()
            .map(|segment| match segment {
                HelpSegment::Text(text) => text.clone(),
                HelpSegment::Suggestion(s) => self.paint(&suggestion_block(s), &[ansi::GREEN]),
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn format_summary(&self, count: usize) -> String {
        let errors = format!("{count} error{}", if count == 1 { "" } else { "s" });
        format!(
            "{} in this commit message.",
            self.paint(&errors, &[ansi::BOLD, ansi::RED])
        )
    }
}

/// Split `line` into the text before, inside and after the highlighted
/// columns. Columns are character offsets and are clamped to the line.
fn split_columns<'a>(line: &'a str, location: &Location) -> (&'a str, &'a str, &'a str) {
    let byte_at = |column: usize| {
        line.char_indices()
            .nth(column)
            .map_or(line.len(), |(offset, _)| offset)
    };
    let start = byte_at(location.columns.start);
    let end = byte_at(location.columns.end).max(start);
    (&line[..start], &line[start..end], &line[end..])
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &MessageReport<'_>) -> Result<String> {
        let mut out = String::new();
        let lines: Vec<&str> = report.message.lines().collect();

        // Group by (code, description); diagnostics without a code sort first.
        let mut sorted: Vec<&Diagnostic> = report.diagnostics.iter().collect();
        sorted.sort_by(|a, b| a.group_key().cmp(&b.group_key()));

        for group in sorted.chunk_by(|a, b| a.group_key() == b.group_key()) {
            self.format_group(&mut out, group, &lines);
        }

        if !report.diagnostics.is_empty() {
            writeln!(out, "{}", self.format_summary(report.diagnostics.len())).ok();
        }

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
