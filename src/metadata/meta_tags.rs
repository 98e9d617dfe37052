//! HTML Meta Tag Extraction
//!
//! `<meta>` and `<link>` lookups: standard names, Open Graph, Twitter cards. Each helper returns
//! the first non-empty value in a fixed source order, or an empty string.

use dom_query::{Document, Selection};

use crate::dom;

/// `content` of the first `meta[name=…]` or `meta[property=…]` among `keys` that has one.
///
/// Keys are tried in order; within a key, the first matching tag in the document wins.
#[must_use]
pub fn meta_content(doc: &Document, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| {
            let selector = format!(r#"meta[name="{key}"], meta[property="{key}"], meta[itemprop="{key}"]"#);
            doc.select(&selector)
                .nodes()
                .iter()
                .map(|meta| dom::attr(meta, "content").trim().to_string())
                .find(|content| !content.is_empty())
        })
        .unwrap_or_default()
}

/// `content` of every `meta[name=…]`/`meta[property=…]` for `key`, in document order.
#[must_use]
pub fn meta_contents(doc: &Document, key: &str) -> Vec<String> {
    let selector = format!(r#"meta[name="{key}"], meta[property="{key}"]"#);
    doc.select(&selector)
        .nodes()
        .iter()
        .map(|meta| dom::attr(meta, "content").trim().to_string())
        .filter(|content| !content.is_empty())
        .collect()
}

/// `href` of the first link matching one of `selectors`, tried in order.
#[must_use]
pub fn link_href(doc: &Document, selectors: &[&str]) -> String {
    selectors
        .iter()
        .find_map(|selector| {
            doc.select(selector)
                .nodes()
                .iter()
                .map(|link| dom::attr(link, "href").trim().to_string())
                .find(|href| !href.is_empty())
        })
        .unwrap_or_default()
}

/// Whitespace-collapsed text of the first element matching `selector`.
#[must_use]
pub fn element_text(doc: &Document, selector: &str) -> String {
    doc.select(selector)
        .nodes()
        .first()
        .map(|node| dom::normalize_whitespace(&Selection::from(*node).text()))
        .unwrap_or_default()
}

/// Split a `keywords` value on commas, trimming entries and dropping empty ones and repeats.
#[must_use]
pub fn parse_keyword_list(content: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for keyword in content.split(',').map(str::trim).filter(|k| !k.is_empty()) {
        if !keywords.iter().any(|k| k == keyword) {
            keywords.push(keyword.to_string());
        }
    }
    keywords
}
