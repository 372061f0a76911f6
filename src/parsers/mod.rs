pub mod docx;
pub mod html;
pub mod pdf;

#[cfg(test)]
mod tests;

use std::path::Path;

/// Returned by [`Parser::extract`] for file types it cannot read
pub const UNSUPPORTED_FORMAT: &str = "Unsupported file format.";

/// Declared kind of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Portable Document Format
    Pdf,
    /// Word (Office Open XML) document
    Docx,
    /// Anything else
    Unsupported,
}

impl DocumentKind {
    /// Determines the document kind from a file extension (without the dot)
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => DocumentKind::Pdf,
            "docx" => DocumentKind::Docx,
            _ => DocumentKind::Unsupported,
        }
    }

    /// Determines the document kind from a file path
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let kind = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(DocumentKind::Unsupported);
        ::log::debug!("Classifying {} as {:?}", path.as_ref().display(), kind);
        kind
    }
}

/// Document text extraction that never fails outward
pub struct Parser;

impl Parser {
    /// Extracts the text of an uploaded document.
    ///
    /// Unsupported kinds yield [`UNSUPPORTED_FORMAT`]; a document that
    /// cannot be parsed yields a message describing the failure.
    pub fn extract(bytes: &[u8], kind: DocumentKind) -> String {
        let extracted = match kind {
            DocumentKind::Pdf => pdf::extract_text(bytes),
            DocumentKind::Docx => docx::extract_text(bytes),
            DocumentKind::Unsupported => return UNSUPPORTED_FORMAT.to_string(),
        };

        match extracted {
            Ok(text) => text,
            Err(e) => {
                ::log::warn!("Document extraction failed: {}", e);
                e.to_string()
            }
        }
    }

    /// Determines the kind from the path and then extracts
    pub fn extract_from_path(bytes: &[u8], path: impl AsRef<Path>) -> String {
        Self::extract(bytes, DocumentKind::from_path(path))
    }
}
