use crate::parsers::html::{self, MAX_ELEMENTS, NO_META_DESCRIPTION};
use crate::results::{ScrapeResult, ScrapeTarget};

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_paragraphs(count: usize) -> String {
        let paragraphs = (1..=count)
            .map(|i| format!("<p>Paragraph {}</p>", i))
            .collect::<String>();
        format!("<html><body>{}</body></html>", paragraphs)
    }

    #[test]
    fn test_meta_description() {
        let page = r#"<html><head>
            <meta charset="utf-8">
            <meta name="description" content="Custom PCs built for creators">
            </head><body><p>Hi</p></body></html>"#;

        let result = html::extract(page, ScrapeTarget::Meta);
        assert_eq!(
            result,
            ScrapeResult::Meta("Custom PCs built for creators".to_string())
        );
    }

    #[test]
    fn test_first_meta_description_wins() {
        let page = r#"<head>
            <meta name="description" content="First">
            <meta name="description" content="Second">
            </head>"#;

        let result = html::extract(page, ScrapeTarget::Meta);
        assert_eq!(result, ScrapeResult::Meta("First".to_string()));
    }

    #[test]
    fn test_missing_meta_description_falls_back() {
        let page = r#"<html><head><meta name="keywords" content="pc"></head></html>"#;

        let result = html::extract(page, ScrapeTarget::Meta);
        assert_eq!(result, ScrapeResult::Meta(NO_META_DESCRIPTION.to_string()));
    }

    #[test]
    fn test_paragraphs_capped_at_five_in_order() {
        let result = html::extract(&page_with_paragraphs(8), ScrapeTarget::Paragraphs);

        let expected = (1..=MAX_ELEMENTS)
            .map(|i| format!("Paragraph {}", i))
            .collect::<Vec<_>>();
        assert_eq!(result, ScrapeResult::Paragraphs(expected));
    }

    #[test]
    fn test_fewer_than_five_paragraphs_returns_all() {
        let result = html::extract(&page_with_paragraphs(3), ScrapeTarget::Paragraphs);
        assert_eq!(
            result,
            ScrapeResult::Paragraphs(vec![
                "Paragraph 1".to_string(),
                "Paragraph 2".to_string(),
                "Paragraph 3".to_string(),
            ])
        );
    }

    #[test]
    fn test_headings_follow_document_order_across_levels() {
        let page = "<body>
            <h2>Products</h2>
            <h1>  Welcome  </h1>
            <h4>Ignored</h4>
            <h3>Pricing</h3>
            <h1>About <em>us</em></h1>
            </body>";

        let result = html::extract(page, ScrapeTarget::Headings);
        assert_eq!(
            result,
            ScrapeResult::Headings(vec![
                "Products".to_string(),
                "Welcome".to_string(),
                "Pricing".to_string(),
                "About us".to_string(),
            ])
        );
    }

    #[test]
    fn test_headings_capped_at_five() {
        let page = "<h1>a</h1><h2>b</h2><h3>c</h3><h1>d</h1><h2>e</h2><h3>f</h3>";

        let result = html::extract(page, ScrapeTarget::Headings);
        assert_eq!(
            result,
            ScrapeResult::Headings(
                ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect()
            )
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let page = "<p>Same</p><p>Same</p>";

        let result = html::extract(page, ScrapeTarget::Paragraphs);
        assert_eq!(
            result,
            ScrapeResult::Paragraphs(vec!["Same".to_string(), "Same".to_string()])
        );
    }

    #[test]
    fn test_page_without_matches_is_empty_not_error() {
        let result = html::extract("<html><body></body></html>", ScrapeTarget::Headings);
        assert_eq!(result, ScrapeResult::Headings(Vec::new()));
    }
}
