//! Subject casing heuristics.
//!
//! Three outcomes are checked in order and the first match wins: a subject
//! written mostly in upper case, a subject written in title case, and a
//! subject whose first character is not upper case. Text inside quotes, code
//! markers and brackets is excluded from the word analysis.
//!
//! The thresholds are tuned so short, legitimately capitalized subjects such
//! as `Fix X` or `Bump API version` are not flagged.

use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostic::{Diagnostic, Help};

use super::{char_len, codes, subject};

/// Minimum number of upper-case words before the ratio rule applies.
const UPPER_MIN_WORDS: usize = 3;
const UPPER_MIN_RATIO: f64 = 0.67;

/// Minimum number of title-case words before the ratio rule applies.
const TITLE_MIN_WORDS: usize = 5;
const TITLE_MIN_RATIO: f64 = 0.75;
/// A fully title-cased subject needs at least this many words to be flagged.
const TITLE_ALL_MIN_WORDS: usize = 3;

/// At least one word must be longer than this for either case rule to fire.
const SIGNIFICANT_WORD_LEN: usize = 2;

const TITLE_CASE_NOTE: &str = "This check can be pedantic in some cases. \
Words in quotes (e.g. \"'\", \"`\") and words\n\
inside code brackets (e.g. \"[]\", \"{}\" etc.) are ignored for this check \
for the purposes of\n\
representing code, quotes, or other terminology.";

static STANDALONE_I: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|\s)i([,.;:]|\s|$)").expect("valid regex")
});

/// Check the casing of the subject line.
#[must_use]
pub fn check_wrong_cased_subject(message: &str) -> Vec<Diagnostic> {
    let Some(subject) = subject(message).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    let stripped = strip_quoted_spans(subject.trim());
    let words: Vec<&str> = stripped.split_whitespace().collect();
    let has_significant_word = words
        .iter()
        .any(|word| char_len(word) > SIGNIFICANT_WORD_LEN);

    if has_significant_word && is_upper_cased(&words) {
        return vec![
            wrong_case(
                "Subject line must not be in upper-case",
                "subject in upper case",
                subject,
            ),
        ];
    }

    if has_significant_word && is_title_cased(&words) {
        return vec![
            wrong_case(
                "Subject line must not be in title-case",
                "subject in title case",
                subject,
            )
            .with_note(TITLE_CASE_NOTE),
        ];
    }

    let mut chars = subject.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => {
            let capitalized: String = first.to_uppercase().chain(chars).collect();
            vec![
                Diagnostic::new("Subject lines must start with an upper-case character")
                    .with_code(codes::WRONG_CASED_SUBJECT)
                    .at(0, 0..1)
                    .with_hint("non-uppercase starting character")
                    .with_help(
                        Help::text("Start the subject with an uppercase character")
                            .then_suggest(capitalized),
                    ),
            ]
        }
        _ => Vec::new(),
    }
}

fn wrong_case(description: &str, hint: &str, subject: &str) -> Diagnostic {
    Diagnostic::new(description)
        .with_code(codes::WRONG_CASED_SUBJECT)
        .at(0, 0..char_len(subject))
        .with_hint(hint)
        .with_help(
            Help::text("Convert the subject to sentence-case:").then_suggest(sentence_case(subject)),
        )
}

fn is_upper_cased(words: &[&str]) -> bool {
    let upper = words.iter().filter(|word| is_upper_word(word)).count();
    upper == words.len()
        || (upper >= UPPER_MIN_WORDS && ratio(upper, words.len()) >= UPPER_MIN_RATIO)
}

fn is_title_cased(words: &[&str]) -> bool {
    let title = words.iter().filter(|word| is_title_word(word)).count();
    (title >= TITLE_MIN_WORDS && ratio(title, words.len()) >= TITLE_MIN_RATIO)
        || (title == words.len() && words.len() >= TITLE_ALL_MIN_WORDS)
}

fn is_upper_word(word: &str) -> bool {
    char_len(word) > 1
        && word.chars().next().is_some_and(char::is_alphabetic)
        && word.to_uppercase() == word
}

fn is_title_word(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() && c.to_uppercase().eq(std::iter::once(c)))
}

#[allow(clippy::cast_precision_loss)] // word counts are tiny
fn ratio(count: usize, total: usize) -> f64 {
    count as f64 / total as f64
}

const fn closing_delimiter(open: char) -> Option<char> {
    match open {
        '`' => Some('`'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

/// Remove quoted, code and bracketed spans from `text`.
///
/// Scanning left to right, an opening delimiter is paired with the nearest
/// matching closer after it and the whole span, delimiters included, is
/// dropped. An opener without a closer is kept as ordinary text.
#[must_use]
pub fn strip_quoted_spans(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if let Some(close) = closing_delimiter(c)
            && let Some(offset) = chars[i + 1..].iter().position(|&d| d == close)
        {
            i += offset + 2;
            continue;
        }
        out.push(c);
        i += 1;
    }

    out
}

/// Rewrite a subject in sentence case.
///
/// The first character is upper-cased and the rest lower-cased, then a
/// standalone `i` pronoun is restored to `I`.
#[must_use]
pub fn sentence_case(subject: &str) -> String {
    let mut chars = subject.trim().chars();
    let lowered: String = match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    };
    STANDALONE_I.replace_all(&lowered, "${1}I${2}").into_owned()
}

#[cfg(test)]
#[path = "casing_tests.rs"]
mod tests;
