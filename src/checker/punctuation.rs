use crate::diagnostic::{Diagnostic, Help};

use super::{char_len, codes, subject};

const INVALID_ENDINGS: [char; 6] = ['.', ',', '!', '?', ':', ';'];

/// Flag a subject whose last character is sentence punctuation.
#[must_use]
pub fn check_subject_end_in_punctuation(message: &str) -> Vec<Diagnostic> {
    let Some(subject) = subject(message) else {
        return Vec::new();
    };
    let Some(ending) = subject
        .chars()
        .next_back()
        .filter(|c| INVALID_ENDINGS.contains(c))
    else {
        return Vec::new();
    };

    let len = char_len(subject);
    let corrected = &subject[..subject.len() - ending.len_utf8()];

    vec![
        Diagnostic::new(format!("Subject must not end in a \"{ending}\" character"))
            .with_code(codes::INVALID_ENDING_PUNCTUATION)
            .at(0, len - 1..len)
            .with_hint(format!("ends in a \"{ending}\""))
            .with_help(
                Help::text("Remove this character:")
                    .then_suggest(corrected)
                    .then_text(
                        "Alternatively, if this is part of a code snippet, \
                         surround the snippet with quotes or \"`\".",
                    ),
            ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Location;

    #[test]
    fn trailing_period_is_flagged() {
        let diags = check_subject_end_in_punctuation("Fixed the bug.");
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].code.as_deref(),
            Some(codes::INVALID_ENDING_PUNCTUATION)
        );
        assert_eq!(diags[0].location, Some(Location::new(0, 13..14)));
        assert_eq!(diags[0].hint.as_deref(), Some("ends in a \".\""));
        assert_eq!(
            diags[0].description,
            "Subject must not end in a \".\" character"
        );
    }

    #[test]
    fn help_suggests_subject_without_ending() {
        let diags = check_subject_end_in_punctuation("Add retries!");
        let help = diags[0].help.as_ref().unwrap();
        assert_eq!(help.suggestion(), Some("Add retries"));
        assert!(help.to_string().contains("code snippet"));
    }

    #[test]
    fn clean_subject_passes() {
        assert!(check_subject_end_in_punctuation("Fixed the bug").is_empty());
    }

    #[test]
    fn every_banned_ending_is_flagged() {
        for ending in INVALID_ENDINGS {
            let diags = check_subject_end_in_punctuation(&format!("Subject{ending}"));
            assert_eq!(diags.len(), 1, "ending {ending:?}");
        }
    }

    #[test]
    fn only_subject_line_is_checked() {
        assert!(check_subject_end_in_punctuation("Subject\n\nBody ends here.").is_empty());
    }

    #[test]
    fn degenerate_messages_pass() {
        assert!(check_subject_end_in_punctuation("").is_empty());
        assert!(check_subject_end_in_punctuation("\nBody.").is_empty());
    }

    #[test]
    fn multibyte_subject_uses_character_columns() {
        let diags = check_subject_end_in_punctuation("Übersetzung aktualisiert?");
        assert_eq!(diags[0].location, Some(Location::new(0, 24..25)));
        assert_eq!(
            diags[0].help.as_ref().unwrap().suggestion(),
            Some("Übersetzung aktualisiert")
        );
    }
}
