//! The article extractor.
//!
//! [`ArticleExtractor`] owns the parsed page. Metadata is read from that page as parsed; content
//! extraction works on copies, so the two steps can run in either order or alone.

use crate::dom::{self, Document};
use crate::encoding::decode_html;
use crate::error::{Error, Result};
use crate::extractor::images::{dominant_image, rank_images};
use crate::extractor::pipeline::{document_base_url, Pass};
use crate::metadata;
use crate::options::Options;
use crate::result::Article;
use crate::url_utils::absolutize;

/// Extracts an [`Article`] from one page.
///
/// # Example
///
/// ```rust
/// use rs_crux::ArticleExtractor;
///
/// let paragraph = "The river rose two metres overnight, flooding the lower town. ".repeat(4);
/// let html = format!(
///     "<html><head><title>Flood</title></head><body><div id=\"sidebar\">Links</div>\
///      <div id=\"story\"><p>{paragraph}</p><p>{paragraph}</p><p>{paragraph}</p></div></body></html>"
/// );
///
/// let article = ArticleExtractor::new("https://news.example/flood", &html)?
///     .extract_metadata()
///     .extract_content()
///     .into_article();
///
/// assert_eq!(article.title, "Flood");
/// assert!(article.content_text().starts_with("The river rose"));
/// assert!(!article.content_html().contains("Links"));
/// # Ok::<(), rs_crux::Error>(())
/// ```
pub struct ArticleExtractor {
    url: String,
    document: Document,
    options: Options,
    article: Article,
}

impl ArticleExtractor {
    /// Parse `html` for the page at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `html` is empty or only whitespace.
    pub fn new(url: &str, html: &str) -> Result<Self> {
        Self::with_options(url, html, Options::default())
    }

    /// Like [`new`](Self::new), with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `html` is empty or only whitespace.
    pub fn with_options(url: &str, html: &str, options: Options) -> Result<Self> {
        if html.trim().is_empty() {
            return Err(Error::InvalidInput(format!("empty HTML for {url}")));
        }
        Ok(Self::from_document_with_options(url, dom::parse(html), options))
    }

    /// Decode raw page bytes (BOM, then `<meta>` charset, then UTF-8) and parse them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `bytes` is empty or decodes to whitespace.
    pub fn from_bytes(url: &str, bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::InvalidInput(format!("empty HTML for {url}")));
        }
        Self::new(url, &decode_html(bytes))
    }

    /// Use an already parsed page.
    #[must_use]
    pub fn from_document(url: &str, document: Document) -> Self {
        Self::from_document_with_options(url, document, Options::default())
    }

    /// Use an already parsed page, with custom options.
    #[must_use]
    pub fn from_document_with_options(url: &str, document: Document, options: Options) -> Self {
        Self {
            url: url.to_string(),
            document,
            options,
            article: Article::new(url),
        }
    }

    /// Fill the metadata fields of the article from the page.
    #[must_use]
    pub fn extract_metadata(mut self) -> Self {
        let doc = &self.document;
        let url = self.url.as_str();
        let article = &mut self.article;

        article.title = metadata::extract_title(doc);
        article.description = metadata::extract_description(doc);
        article.site_name = metadata::extract_site_name(doc);
        article.theme_color = metadata::extract_theme_color(doc);

        let canonical_url = absolutize(&metadata::extract_canonical_url(doc), url);
        if !canonical_url.is_empty() {
            article.canonical_url = canonical_url;
        }
        article.amp_url = absolutize(&metadata::extract_amp_url(doc), url);
        article.feed_url = absolutize(&metadata::extract_feed_url(doc), url);
        article.video_url = absolutize(&metadata::extract_video_url(doc), url);
        article.favicon_url = absolutize(&metadata::extract_favicon_url(doc), url);
        article.keywords = metadata::extract_keywords(doc);
        article.image_url = absolutize(&metadata::extract_image_url(doc, &article.images), url);

        tracing::debug!(title = %article.title, "extracted metadata");
        self
    }

    /// Select, clean and store the article body, its images and the dominant image URL.
    ///
    /// The first pass strips unlikely candidates before scoring (see [`Options`]). When it
    /// selects nothing, or less text than `min_article_text_length`, a second pass runs on a
    /// fresh copy of the page without that stripping; its result is used unless it selects
    /// nothing.
    #[must_use]
    pub fn extract_content(mut self) -> Self {
        let first = Pass::run(&self.document, &self.options.first_pass());

        let pass = if first.is_empty() || first.text_len() < self.options.min_article_text_length {
            tracing::info!(
                text_len = first.text_len(),
                min = self.options.min_article_text_length,
                "first pass too short, retrying without stripping unlikely candidates"
            );
            let second = Pass::run(&self.document, &self.options.fallback_pass());
            if second.is_empty() {
                first
            } else {
                second
            }
        } else {
            first
        };

        let (document, images) = pass.finish(&self.url);
        self.article.document = document;
        self.article.images = rank_images(&images);
        // Body images resolve like the rest of the body; page metadata against the page URL.
        self.article.image_url = match dominant_image(&self.article.images) {
            Some(image) => absolutize(&image.src, &document_base_url(&self.document, &self.url)),
            None => absolutize(&metadata::extract_image_url(&self.document, &[]), &self.url),
        };

        tracing::debug!(
            images = self.article.images.len(),
            empty = self.article.is_empty(),
            "extracted content"
        );
        self
    }

    /// The article extracted so far.
    #[must_use]
    pub fn article(&self) -> &Article {
        &self.article
    }

    /// Consume the extractor and return the article.
    #[must_use]
    pub fn into_article(self) -> Article {
        self.article
    }

    /// The page URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The options in use.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
