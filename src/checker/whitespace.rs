use crate::diagnostic::{Diagnostic, Help};

use super::{char_len, codes, is_whitespace_only, message_lines};

/// Line 1 belongs to the second-line check.
const SECOND_LINE: usize = 1;

/// Flag leading and trailing whitespace on lines that have other content.
#[must_use]
pub fn check_untrimmed_line(message: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for (row, line) in message_lines(message).into_iter().enumerate() {
        if row == SECOND_LINE || line.is_empty() || is_whitespace_only(line) {
            continue;
        }

        let len = char_len(line);
        let leading = len - char_len(line.trim_start());
        if leading > 0 {
            diagnostics.push(
                untrimmed(row, 0..leading)
                    .with_hint("leading whitespace")
                    .with_help(Help::text("Remove this leading whitespace")),
            );
        }

        let trimmed_end = char_len(line.trim_end());
        if trimmed_end < len {
            diagnostics.push(
                untrimmed(row, trimmed_end..len)
                    .with_hint("trailing whitespace")
                    .with_help(Help::text("Remove this trailing whitespace")),
            );
        }
    }

    diagnostics
}

fn untrimmed(row: usize, columns: std::ops::Range<usize>) -> Diagnostic {
    Diagnostic::new("Lines must not have leading or trailing whitespace")
        .with_code(codes::UNTRIMMED_LINE)
        .at(row, columns)
}

/// Flag lines made entirely of whitespace. Truly empty lines are fine.
#[must_use]
pub fn check_empty_line(message: &str) -> Vec<Diagnostic> {
    message_lines(message)
        .into_iter()
        .enumerate()
        .filter(|(row, line)| *row != SECOND_LINE && is_whitespace_only(line))
        .map(|(row, line)| {
            Diagnostic::new("Lines must not be entirely whitespace")
                .with_code(codes::EMPTY_LINE)
                .at(row, 0..char_len(line))
                .with_hint("entirely whitespace")
                .with_help(Help::text("Remove this whitespace"))
        })
        .collect()
}

#[cfg(test)]
#[path = "whitespace_tests.rs"]
mod tests;
