use crate::parsers::ParsedPage;
use scraper::{Html, Selector};

/// Parses an HTML document into body text and anchor hrefs in one pass
pub fn parse(html: &str) -> ParsedPage {
    let doc = Html::parse_document(html);

    // Extract text content of the body only
    let content_selector = Selector::parse("body").unwrap();
    let body_text = doc
        .select(&content_selector)
        .flat_map(|n| n.text())
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    // Extract anchor hrefs, keeping document order and duplicates
    let anchor_selector = Selector::parse("a").unwrap();
    let anchors = doc
        .select(&anchor_selector)
        .filter_map(|e| e.value().attr("href"))
        .map(|s| s.to_string())
        .collect::<Vec<String>>();

    ::log::debug!("HTML parser found {} anchors", anchors.len());

    ParsedPage::new(body_text, anchors)
}
