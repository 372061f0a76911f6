use crate::errors::{PipelineError, Result};
use lopdf::Document;

/// Extracts the text of every page, in page order, separated by newlines
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let doc = Document::load_mem(bytes).map_err(|e| PipelineError::Extraction(e.to_string()))?;

    let pages = doc.get_pages();
    ::log::debug!("PDF extractor found {} pages", pages.len());

    let mut texts = Vec::with_capacity(pages.len());
    for page_number in pages.keys() {
        let text = doc.extract_text(&[*page_number]).map_err(|e| {
            PipelineError::Extraction(format!("page {}: {}", page_number, e))
        })?;
        // lopdf ends every page with a newline of its own
        texts.push(text.trim_end_matches('\n').to_string());
    }

    Ok(texts.join("\n"))
}
