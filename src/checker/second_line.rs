use crate::diagnostic::{Diagnostic, Help};

use super::{char_len, codes, is_whitespace_only, message_lines};

/// Require the line after the subject to be exactly empty.
///
/// Line 1 is owned by this check; the whitespace checks skip it.
#[must_use]
pub fn check_non_empty_second_line(message: &str) -> Vec<Diagnostic> {
    let lines = message_lines(message);
    let (Some(subject), Some(offender)) = (lines.first(), lines.get(1)) else {
        return Vec::new();
    };
    if offender.is_empty() {
        return Vec::new();
    }

    let whitespace = is_whitespace_only(offender);
    let (hint, help) = if whitespace {
        (
            "non-empty second line (these characters are whitespace)",
            Help::text("Remove these extra whitespace characters."),
        )
    } else {
        (
            "non-empty second line",
            Help::text("Add an empty line between the subject and this line:")
                .then_suggest(format!("{subject}\n\n{offender}")),
        )
    };

    vec![
        Diagnostic::new("There must be an empty line between the subject and the body")
            .with_code(codes::NON_EMPTY_SECOND_LINE)
            .at(1, 0..char_len(offender))
            .with_hint(hint)
            .with_help(help),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Location;

    #[test]
    fn body_directly_after_subject_is_flagged() {
        let diags = check_non_empty_second_line("Fix bug\nThis explains it");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code.as_deref(), Some(codes::NON_EMPTY_SECOND_LINE));
        assert_eq!(diags[0].location, Some(Location::new(1, 0..16)));
        assert_eq!(diags[0].hint.as_deref(), Some("non-empty second line"));
        assert_eq!(
            diags[0].help.as_ref().unwrap().suggestion(),
            Some("Fix bug\n\nThis explains it")
        );
    }

    #[test]
    fn whitespace_second_line_gets_whitespace_hint() {
        let diags = check_non_empty_second_line("Fix bug\n   \nBody");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].location, Some(Location::new(1, 0..3)));
        assert_eq!(
            diags[0].hint.as_deref(),
            Some("non-empty second line (these characters are whitespace)")
        );
        assert_eq!(
            diags[0].help.as_ref().unwrap().to_string(),
            "Remove these extra whitespace characters."
        );
    }

    #[test]
    fn blank_second_line_passes() {
        assert!(check_non_empty_second_line("Fix bug\n\nBody").is_empty());
    }

    #[test]
    fn subject_only_passes() {
        assert!(check_non_empty_second_line("Fix bug").is_empty());
        assert!(check_non_empty_second_line("Fix bug\n").is_empty());
        assert!(check_non_empty_second_line("").is_empty());
    }
}
