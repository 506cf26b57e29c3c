use serde::Serialize;

use crate::checker::subject;
use crate::diagnostic::Diagnostic;
use crate::error::Result;

use super::{MessageReport, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    commit: Option<&'a str>,
    subject: Option<&'a str>,
    diagnostics: &'a [Diagnostic],
    summary: Summary,
}

#[derive(Serialize)]
struct Summary {
    errors: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &MessageReport<'_>) -> Result<String> {
        let output = JsonOutput {
            commit: report.commit,
            subject: subject(report.message),
            diagnostics: report.diagnostics,
            summary: Summary {
                errors: report.diagnostics.len(),
            },
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}
