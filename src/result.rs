//! Result types for extraction output.
//!
//! [`Article`] is the structured record produced by
//! [`ArticleExtractor`](crate::ArticleExtractor): page metadata, the cleaned article body and the
//! images found in it.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::dom::{self, Document};

/// An `<img>` found inside the selected article body.
///
/// Records are built once during image collection and never mutated afterwards; ranking builds
/// new records with the weight filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Image {
    /// `data-src` when non-empty (lazy-loading sites), else `src`. Not absolutized.
    pub src: String,

    /// Dominant-image weight; `0` until ranked.
    pub weight: i32,

    /// `title` attribute.
    pub title: String,

    /// Declared height, `0` when absent or malformed.
    pub height: i32,

    /// Declared width, `0` when absent or malformed.
    pub width: i32,

    /// `alt` attribute.
    pub alt: String,

    /// Whether the parent element carries `rel="nofollow"`.
    pub no_follow: bool,

    /// Outer HTML of the `<img>` at collection time.
    pub element_html: String,
}

/// The extracted article.
///
/// Every URL field is either empty or absolute. `canonical_url` starts out as the page URL and
/// is replaced only when the page declares a canonical URL of its own.
pub struct Article {
    /// The page URL given to the extractor.
    pub url: String,

    /// Left empty by extraction; available to callers that track redirects.
    pub original_url: String,

    pub title: String,
    pub description: String,
    pub site_name: String,
    pub theme_color: String,

    pub amp_url: String,
    pub canonical_url: String,
    pub image_url: String,
    pub video_url: String,
    pub feed_url: String,
    pub favicon_url: String,

    /// The cleaned article body. Its `<body>` is empty when nothing was extracted.
    pub document: Document,

    pub keywords: Vec<String>,

    /// Images of the selected body in document order.
    pub images: Vec<Image>,
}

impl Article {
    /// An empty article for `url`.
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            original_url: String::new(),
            title: String::new(),
            description: String::new(),
            site_name: String::new(),
            theme_color: String::new(),
            amp_url: String::new(),
            canonical_url: url.to_string(),
            image_url: String::new(),
            video_url: String::new(),
            feed_url: String::new(),
            favicon_url: String::new(),
            document: empty_document(),
            keywords: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Inner HTML of the cleaned body.
    #[must_use]
    pub fn content_html(&self) -> String {
        self.document.select("body").inner_html().to_string()
    }

    /// Whitespace-normalised text of the cleaned body.
    #[must_use]
    pub fn content_text(&self) -> String {
        dom::normalize_whitespace(&self.document.select("body").text())
    }

    /// Whether no article body was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        dom::body(&self.document).is_none_or(|body| body.children().is_empty())
    }
}

pub(crate) fn empty_document() -> Document {
    dom::parse("")
}

impl fmt::Debug for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Article")
            .field("url", &self.url)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("site_name", &self.site_name)
            .field("theme_color", &self.theme_color)
            .field("amp_url", &self.amp_url)
            .field("original_url", &self.original_url)
            .field("canonical_url", &self.canonical_url)
            .field("image_url", &self.image_url)
            .field("video_url", &self.video_url)
            .field("feed_url", &self.feed_url)
            .field("favicon_url", &self.favicon_url)
            .field("document", &self.content_html())
            .field("keywords", &self.keywords)
            .field("images", &self.images)
            .finish()
    }
}

impl Serialize for Article {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Article", 15)?;
        state.serialize_field("url", &self.url)?;
        state.serialize_field("original_url", &self.original_url)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("site_name", &self.site_name)?;
        state.serialize_field("theme_color", &self.theme_color)?;
        state.serialize_field("amp_url", &self.amp_url)?;
        state.serialize_field("canonical_url", &self.canonical_url)?;
        state.serialize_field("image_url", &self.image_url)?;
        state.serialize_field("video_url", &self.video_url)?;
        state.serialize_field("feed_url", &self.feed_url)?;
        state.serialize_field("favicon_url", &self.favicon_url)?;
        state.serialize_field("document", &self.content_html())?;
        state.serialize_field("keywords", &self.keywords)?;
        state.serialize_field("images", &self.images)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_article_defaults() {
        let article = Article::new("https://example.com/a");
        assert_eq!(article.canonical_url, "https://example.com/a");
        assert!(article.original_url.is_empty());
        assert!(article.images.is_empty());
        assert!(article.is_empty());
        assert_eq!(article.content_text(), "");
    }

    #[test]
    fn serializes_document_as_html() {
        let article = Article::new("https://example.com/a");
        match serde_json::to_value(&article) {
            Ok(value) => {
                assert_eq!(value["canonical_url"], "https://example.com/a");
                assert_eq!(value["document"], "");
                assert!(value["images"].as_array().is_some_and(Vec::is_empty));
            }
            Err(e) => panic!("serialization failed: {e}"),
        }
    }
}
