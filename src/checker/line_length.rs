use crate::diagnostic::{Diagnostic, Help};

use super::{char_len, codes, message_lines};

/// Maximum number of characters allowed on any line.
pub const LINE_LIMIT: usize = 72;

/// Flag every line longer than [`LINE_LIMIT`], highlighting the overflow.
#[must_use]
pub fn check_line_too_long(message: &str) -> Vec<Diagnostic> {
    message_lines(message)
        .into_iter()
        .enumerate()
        .filter_map(|(row, line)| {
            let len = char_len(line);
            (len > LINE_LIMIT).then(|| line_too_long(row, len))
        })
        .collect()
}

fn line_too_long(row: usize, len: usize) -> Diagnostic {
    let (hint, help) = if row == 0 {
        (
            "subject line too long",
            Help::text("Shorten this subject line.").then_text(
                "If necessary, move extra details in this long subject line to the body.",
            ),
        )
    } else {
        (
            "body line too long",
            Help::text("Split this long line into two or more shorter lines."),
        )
    };

    Diagnostic::new(format!(
        "Lines must not be over {LINE_LIMIT} characters long"
    ))
    .with_code(codes::LINE_TOO_LONG)
    .at(row, LINE_LIMIT..len)
    .with_hint(hint)
    .with_help(help)
}

#[cfg(test)]
#[path = "line_length_tests.rs"]
mod tests;
