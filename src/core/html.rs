// src/core/html.rs
use scraper::Html;

/// Flatten a page to its text nodes, in document order, with no separators added.
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn page_text(raw: &[u8]) -> String {
    let doc = Html::parse_document(&String::from_utf8_lossy(raw));
    doc.root_element().text().collect()
}
