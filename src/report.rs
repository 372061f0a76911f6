use crate::results::InsightReport;
use serde::Serialize;

pub const REPORT_FILE_NAME: &str = "report.txt";
pub const REPORT_MIME_TYPE: &str = "text/plain";

/// Downloadable copy of a generated report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportArtifact {
    pub file_name: String,
    pub mime_type: String,
    pub data: String,
}

impl ReportArtifact {
    pub fn from_report(report: &InsightReport) -> Self {
        Self {
            file_name: REPORT_FILE_NAME.to_string(),
            mime_type: REPORT_MIME_TYPE.to_string(),
            data: report.to_plain_text(),
        }
    }
}

/// Renders a report as markdown for display.
///
/// Text is HTML-escaped and every newline becomes a markdown hard break;
/// structured reports are shown as pretty-printed JSON.
pub fn render(report: &InsightReport) -> String {
    match report {
        InsightReport::Text(text) => escape_html(text).replace('\n', "  \n"),
        InsightReport::Structured(_) => format!("```json\n{}\n```", report.to_plain_text()),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
