/// Line git writes into the commit template; everything below it is dropped.
pub const SCISSORS_LINE: &str = "# ------------------------ >8 ------------------------";

/// Apply the cleanup git performs on an edited commit message before
/// recording it: comment lines and everything after the scissors line are
/// removed, trailing whitespace is trimmed from every line, runs of blank
/// lines collapse into one and leading or trailing blank lines are dropped.
#[must_use]
pub fn cleanup_message(raw: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for line in raw.lines() {
        if line == SCISSORS_LINE {
            break;
        }
        if line.starts_with('#') {
            continue;
        }

        let line = line.trim_end();
        let previous_blank = kept.last().is_none_or(|last| last.is_empty());
        if line.is_empty() && previous_blank {
            continue;
        }
        kept.push(line);
    }

    if kept.last().is_some_and(|line| line.is_empty()) {
        kept.pop();
    }
    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_message_unchanged() {
        assert_eq!(cleanup_message("Fix bug\n\nDetails"), "Fix bug\n\nDetails");
    }

    #[test]
    fn comment_lines_removed() {
        let raw = "Fix bug\n\n# Please enter the commit message\n# Lines starting with '#' are ignored\n";
        assert_eq!(cleanup_message(raw), "Fix bug");
    }

    #[test]
    fn scissors_drops_the_rest() {
        let raw = format!("Fix bug\n\nBody\n{SCISSORS_LINE}\ndiff --git a/x b/x\n+added\n");
        assert_eq!(cleanup_message(&raw), "Fix bug\n\nBody");
    }

    #[test]
    fn trailing_whitespace_and_blank_lines_are_cleaned() {
        let raw = "Fix bug  \n\nBody line   \n   \n# comment";
        assert_eq!(cleanup_message(raw), "Fix bug\n\nBody line");
    }

    #[test]
    fn leading_blank_lines_are_dropped() {
        assert_eq!(cleanup_message("\n  \nFix bug\n\nBody"), "Fix bug\n\nBody");
    }

    #[test]
    fn runs_of_blank_lines_collapse() {
        assert_eq!(
            cleanup_message("Fix bug\n\n\n \n\nFirst\n\n\nSecond"),
            "Fix bug\n\nFirst\n\nSecond"
        );
    }

    #[test]
    fn blank_line_left_by_removed_comment_collapses() {
        assert_eq!(cleanup_message("Fix bug\n\n# note\n\nBody"), "Fix bug\n\nBody");
    }

    #[test]
    fn leading_whitespace_is_kept() {
        assert_eq!(cleanup_message("Fix bug\n\n  # heading"), "Fix bug\n\n  # heading");
    }

    #[test]
    fn only_comments_is_empty() {
        assert_eq!(cleanup_message("# nothing\n# here\n"), "");
    }
}
