use crate::results::{ScrapeResult, ScrapeTarget};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Maximum number of headings or paragraphs kept from a page
pub const MAX_ELEMENTS: usize = 5;

/// Returned when a page has no description meta tag
pub const NO_META_DESCRIPTION: &str = "No meta description found.";

static META_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("meta selector should be valid")
});

static HEADINGS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3").expect("heading selector should be valid"));

static PARAGRAPHS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("paragraph selector should be valid"));

/// Extracts the requested part of an HTML document
pub fn extract(html: &str, target: ScrapeTarget) -> ScrapeResult {
    let doc = Html::parse_document(html);

    match target {
        ScrapeTarget::Meta => ScrapeResult::Meta(meta_description(&doc)),
        ScrapeTarget::Headings => ScrapeResult::Headings(first_texts(&doc, &HEADINGS)),
        ScrapeTarget::Paragraphs => ScrapeResult::Paragraphs(first_texts(&doc, &PARAGRAPHS)),
    }
}

/// Returns the description meta content, or the fixed fallback
pub fn meta_description(doc: &Html) -> String {
    doc.select(&META_DESCRIPTION)
        .next()
        .and_then(|e| e.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_else(|| NO_META_DESCRIPTION.to_string())
}

/// Texts of the first `MAX_ELEMENTS` matches, in document order
fn first_texts(doc: &Html, selector: &Selector) -> Vec<String> {
    let texts = doc
        .select(selector)
        .take(MAX_ELEMENTS)
        .map(element_text)
        .collect::<Vec<_>>();

    ::log::debug!("HTML extractor kept {} elements", texts.len());
    texts
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
