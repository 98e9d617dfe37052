//! Metadata extraction.
//!
//! Page-level fields read from the original, unmutated document: `<meta>` and `<link>` tags
//! first, JSON-LD and the DOM as fallbacks. Every helper returns an empty string (or an empty
//! list) when the page has nothing to offer. URL-valued helpers return the raw attribute value;
//! [`ArticleExtractor`](crate::ArticleExtractor) absolutizes them.

pub mod json_ld;
pub mod meta_tags;

use dom_query::Document;

use crate::dom;
use crate::extractor::images::dominant_image;
use crate::result::Image;

pub use json_ld::JsonLd;
pub use meta_tags::{element_text, link_href, meta_content, meta_contents, parse_keyword_list};

/// `<title>`, then `og:title`, `twitter:title`, JSON-LD `headline`, and the first `<h1>`.
#[must_use]
pub fn extract_title(doc: &Document) -> String {
    let title = element_text(doc, "title");
    if !title.is_empty() {
        return title;
    }
    let title = meta_content(doc, &["og:title", "twitter:title"]);
    if !title.is_empty() {
        return dom::normalize_whitespace(&title);
    }
    if let Some(headline) = JsonLd::from_document(doc).headline() {
        return dom::normalize_whitespace(&headline);
    }
    element_text(doc, "h1")
}

/// `description`, `og:description`, `twitter:description`, then JSON-LD `description`.
#[must_use]
pub fn extract_description(doc: &Document) -> String {
    let description = meta_content(doc, &["description", "og:description", "twitter:description"]);
    if !description.is_empty() {
        return description;
    }
    JsonLd::from_document(doc).description().unwrap_or_default()
}

/// `og:site_name`, then `application-name`.
#[must_use]
pub fn extract_site_name(doc: &Document) -> String {
    meta_content(doc, &["og:site_name", "application-name"])
}

/// `theme-color`.
#[must_use]
pub fn extract_theme_color(doc: &Document) -> String {
    meta_content(doc, &["theme-color"])
}

/// `<link rel="canonical">`, then `og:url`.
#[must_use]
pub fn extract_canonical_url(doc: &Document) -> String {
    let canonical = link_href(doc, &[r#"link[rel="canonical"]"#]);
    if !canonical.is_empty() {
        return canonical;
    }
    meta_content(doc, &["og:url"])
}

/// `<link rel="amphtml">`.
#[must_use]
pub fn extract_amp_url(doc: &Document) -> String {
    link_href(doc, &[r#"link[rel="amphtml"]"#])
}

/// The first RSS or Atom alternate link.
#[must_use]
pub fn extract_feed_url(doc: &Document) -> String {
    link_href(
        doc,
        &[r#"link[rel="alternate"][type="application/rss+xml"], link[rel="alternate"][type="application/atom+xml"]"#],
    )
}

/// `og:video:secure_url`, `og:video:url`, `og:video`, then `twitter:player`.
#[must_use]
pub fn extract_video_url(doc: &Document) -> String {
    meta_content(
        doc,
        &["og:video:secure_url", "og:video:url", "og:video", "twitter:player"],
    )
}

/// Apple touch icon, then `icon`, then `shortcut icon`.
#[must_use]
pub fn extract_favicon_url(doc: &Document) -> String {
    link_href(
        doc,
        &[
            r#"link[rel="apple-touch-icon"], link[rel="apple-touch-icon-precomposed"]"#,
            r#"link[rel="icon"]"#,
            r#"link[rel="shortcut icon"]"#,
        ],
    )
}

/// `keywords` meta (comma-split, deduplicated), then `article:tag` metas, then JSON-LD
/// `keywords`.
#[must_use]
pub fn extract_keywords(doc: &Document) -> Vec<String> {
    let keywords = parse_keyword_list(&meta_content(doc, &["keywords"]));
    if !keywords.is_empty() {
        return keywords;
    }
    let tags = parse_keyword_list(&meta_contents(doc, "article:tag").join(","));
    if !tags.is_empty() {
        return tags;
    }
    parse_keyword_list(&JsonLd::from_document(doc).keywords().join(","))
}

/// The dominant image of `images` (already ranked), else `og:image`, `twitter:image`,
/// `<link rel="image_src">`, and finally the JSON-LD `image`.
#[must_use]
pub fn extract_image_url(doc: &Document, images: &[Image]) -> String {
    if let Some(image) = dominant_image(images) {
        return image.src.clone();
    }
    let meta = meta_content(
        doc,
        &["og:image:secure_url", "og:image", "twitter:image", "twitter:image:src"],
    );
    if !meta.is_empty() {
        return meta;
    }
    let link = link_href(doc, &[r#"link[rel="image_src"]"#]);
    if !link.is_empty() {
        return link;
    }
    JsonLd::from_document(doc).image().unwrap_or_default()
}
