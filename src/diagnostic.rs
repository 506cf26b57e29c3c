//! Diagnostic data model shared by the checks and the renderers.

use std::fmt;
use std::ops::Range;

use serde::{Serialize, Serializer};

/// Width of the left gutter used for line labels and suggestion blocks.
pub const GUTTER_WIDTH: usize = 8;

/// A highlighted span on a single line of the message.
///
/// `columns` is a half-open range of character offsets (not bytes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Zero-based line index into the message.
    pub line: usize,
    pub columns: Range<usize>,
}

impl Location {
    #[must_use]
    pub const fn new(line: usize, columns: Range<usize>) -> Self {
        Self { line, columns }
    }
}

/// One piece of a help block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpSegment {
    /// Plain explanatory prose.
    Text(String),
    /// An example replacement, shown indented behind a `|` gutter.
    Suggestion(String),
}

/// Remediation text attached to a diagnostic.
///
/// Segments are separated by a blank line when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Help {
    segments: Vec<HelpSegment>,
}

impl Help {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            segments: vec![HelpSegment::Text(text.into())],
        }
    }

    #[must_use]
    pub fn then_suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.segments.push(HelpSegment::Suggestion(suggestion.into()));
        self
    }

    #[must_use]
    pub fn then_text(mut self, text: impl Into<String>) -> Self {
        self.segments.push(HelpSegment::Text(text.into()));
        self
    }

    #[must_use]
    pub fn segments(&self) -> &[HelpSegment] {
        &self.segments
    }

    /// The first suggested replacement, if any.
    #[must_use]
    pub fn suggestion(&self) -> Option<&str> {
        self.segments.iter().find_map(|segment| match segment {
            HelpSegment::Suggestion(s) => Some(s.as_str()),
            HelpSegment::Text(_) => None,
        })
    }
}

/// Indents every line of `suggestion` behind the `|` gutter.
#[must_use]
pub fn suggestion_block(suggestion: &str) -> String {
    suggestion
        .lines()
        .map(|line| format!("{:>GUTTER_WIDTH$}{line}", "| "))
        .collect::<Vec<_>>()
        .join("\n")
}

impl fmt::Display for Help {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            match segment {
                HelpSegment::Text(text) => f.write_str(text)?,
                HelpSegment::Suggestion(s) => f.write_str(&suggestion_block(s))?,
            }
        }
        Ok(())
    }
}

impl Serialize for Help {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One reported policy violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<Help>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            code: None,
            hint: None,
            location: None,
            help: None,
            note: None,
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn at(mut self, line: usize, columns: Range<usize>) -> Self {
        self.location = Some(Location::new(line, columns));
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: Help) -> Self {
        self.help = Some(help);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Grouping and ordering key used by the renderers.
    ///
    /// `None` codes order before any `Some` code.
    #[must_use]
    pub fn group_key(&self) -> (Option<&str>, &str) {
        (self.code.as_deref(), self.description.as_str())
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
