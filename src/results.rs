use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which part of a fetched page to keep as context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeTarget {
    /// `content` of `<meta name="description">`
    Meta,
    /// First few `h1`/`h2`/`h3` texts
    Headings,
    /// First few `p` texts
    #[default]
    Paragraphs,
}

/// Outcome of gathering context from a single URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum ScrapeResult {
    Meta(String),
    Headings(Vec<String>),
    Paragraphs(Vec<String>),
    /// Fetch failed; the message says why
    Error(String),
}

impl ScrapeResult {
    pub fn is_error(&self) -> bool {
        matches!(self, ScrapeResult::Error(_))
    }

    /// Text to splice into a prompt. An error contributes no context.
    pub fn as_context(&self) -> String {
        match self {
            ScrapeResult::Meta(description) => description.clone(),
            ScrapeResult::Headings(items) | ScrapeResult::Paragraphs(items) => items.join("\n"),
            ScrapeResult::Error(_) => String::new(),
        }
    }
}

/// Response returned by the chat model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InsightReport {
    Text(String),
    Structured(Map<String, Value>),
}

impl InsightReport {
    /// Classifies a raw message `content` value. Anything that is neither a
    /// string nor an object is rejected by returning `None`.
    pub fn from_content(content: Value) -> Option<Self> {
        match content {
            Value::String(text) => Some(InsightReport::Text(text)),
            Value::Object(map) => Some(InsightReport::Structured(map)),
            _ => None,
        }
    }

    /// Plain-text form used for the download artifact
    pub fn to_plain_text(&self) -> String {
        match self {
            InsightReport::Text(text) => text.clone(),
            InsightReport::Structured(map) => serde_json::to_string_pretty(map)
                .unwrap_or_else(|_| Value::Object(map.clone()).to_string()),
        }
    }
}
