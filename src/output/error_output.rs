//! Runtime error and warning output on stderr.
//!
//! These are tool failures (unreadable config, missing repository), not
//! commit message diagnostics. Format:
//! `✖ Type: message` / `  × detail` / `  help: suggestion`

use std::io::Write;

use super::{ColorMode, ansi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Error,
    Warning,
}

/// Writes tool errors and warnings, colored when the mode allows it.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(),
        }
    }

    /// Output with colors forced on or off (for testing).
    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Writes `✖ {error_type}: {message}` plus optional detail and help lines.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write_entry(w, Level::Error, error_type, message, detail, suggestion);
    }

    /// Writes `⚠ Warning: {message}` plus optional detail and help lines.
    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write_entry(w, Level::Warning, "Warning", message, detail, suggestion);
    }

    fn write_entry<W: Write>(
        &self,
        w: &mut W,
        level: Level,
        title: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let (icon, color) = match level {
            Level::Error => ("✖", ansi::RED),
            Level::Warning => ("⚠", ansi::YELLOW),
        };
        let heading = self.paint(&format!("{icon} {title}:"), &[ansi::BOLD, color]);

        // Write failures on stderr are ignored: there is nowhere left to report them.
        let _ = writeln!(w, "{heading} {message}");
        if let Some(detail) = detail {
            let _ = writeln!(w, "  {}", self.paint(&format!("× {detail}"), &[ansi::DIM]));
        }
        if let Some(suggestion) = suggestion {
            let _ = writeln!(w, "  {} {suggestion}", self.paint("help:", &[ansi::CYAN]));
        }
        let _ = w.flush();
    }

    fn paint(&self, text: &str, styles: &[&str]) -> String {
        if self.use_colors {
            format!("{}{text}{}", styles.concat(), ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
