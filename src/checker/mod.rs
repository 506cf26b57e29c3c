mod casing;
mod line_length;
mod punctuation;
mod second_line;
mod whitespace;

pub use casing::{check_wrong_cased_subject, sentence_case, strip_quoted_spans};
pub use line_length::{LINE_LIMIT, check_line_too_long};
pub use punctuation::check_subject_end_in_punctuation;
pub use second_line::check_non_empty_second_line;
pub use whitespace::{check_empty_line, check_untrimmed_line};

use crate::diagnostic::Diagnostic;

/// Stable diagnostic codes emitted by the checks.
pub mod codes {
    pub const LINE_TOO_LONG: &str = "LINE_TOO_LONG";
    pub const INVALID_ENDING_PUNCTUATION: &str = "INVALID_ENDING_PUNCTUATION";
    pub const NON_EMPTY_SECOND_LINE: &str = "NON_EMPTY_SECOND_LINE";
    pub const WRONG_CASED_SUBJECT: &str = "WRONG_CASED_SUBJECT";
    pub const UNTRIMMED_LINE: &str = "UNTRIMMED_LINE";
    pub const EMPTY_LINE: &str = "EMPTY_LINE";
}

/// A single message check.
///
/// Checks are pure and total: any string, including the empty one, yields a
/// (possibly empty) list of diagnostics.
pub type Check = fn(&str) -> Vec<Diagnostic>;

/// All checks, in the order their diagnostics are reported.
pub const CHECKS: &[Check] = &[
    check_line_too_long,
    check_subject_end_in_punctuation,
    check_non_empty_second_line,
    check_wrong_cased_subject,
    check_untrimmed_line,
    check_empty_line,
];

/// Run every check against `message` and concatenate the results.
#[must_use]
pub fn run_checks(message: &str) -> Vec<Diagnostic> {
    CHECKS.iter().flat_map(|check| check(message)).collect()
}

/// Split a message into lines, without line terminators.
#[must_use]
pub fn message_lines(message: &str) -> Vec<&str> {
    message.lines().collect()
}

/// The first line of the message, if there is one.
#[must_use]
pub fn subject(message: &str) -> Option<&str> {
    message.lines().next()
}

/// Length in characters. All diagnostic columns are character offsets.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// True for a non-empty line made only of whitespace.
pub(crate) fn is_whitespace_only(line: &str) -> bool {
    !line.is_empty() && line.chars().all(char::is_whitespace)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
