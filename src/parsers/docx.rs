use crate::errors::{PipelineError, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Archive member holding the main document body
const DOCUMENT_PART: &str = "word/document.xml";

fn extraction_error(err: impl std::fmt::Display) -> PipelineError {
    PipelineError::Extraction(err.to_string())
}

/// Extracts every paragraph of a Word document, separated by newlines
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(extraction_error)?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(extraction_error)?
        .read_to_string(&mut xml)
        .map_err(extraction_error)?;

    let paragraphs = paragraphs_from_xml(&xml)?;
    ::log::debug!("DOCX extractor found {} paragraphs", paragraphs.len());

    Ok(paragraphs.join("\n"))
}

/// Collects the text runs of each `w:p` element.
///
/// Paragraphs nested in another paragraph (text boxes) are emitted when they
/// close, ahead of the paragraph that holds them.
pub fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event().map_err(extraction_error)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => open.push(String::new()),
                b"w:t" => in_text_run = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" => push_to(&mut open, "\t"),
                b"w:br" => push_to(&mut open, "\n"),
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                let text = t.unescape().map_err(extraction_error)?;
                push_to(&mut open, &text);
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => {
                    if let Some(paragraph) = open.pop() {
                        paragraphs.push(paragraph);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_to(open: &mut [String], text: &str) {
    if let Some(paragraph) = open.last_mut() {
        paragraph.push_str(text);
    }
}
