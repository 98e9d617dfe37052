//! # rs-crux
//!
//! Article extraction for arbitrary web pages.
//!
//! Given a page URL and its HTML, the extractor produces an [`Article`]: page metadata (title,
//! description, site name, theme color, canonical/AMP/feed/video/favicon URLs, keywords), the
//! subtree most likely to hold the article body, cleaned down to paragraphs, headings, links and
//! images, and the images of that body with a dominant image chosen.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_crux::extract;
//!
//! let paragraph = "The museum reopened on Saturday, after a two-year renovation. ".repeat(4);
//! let html = format!(
//!     "<html><head><title>Museum reopens</title></head>\
//!      <body><nav>Home | News</nav><article><p>{paragraph}</p><p>{paragraph}</p>\
//!      <p>{paragraph}</p></article></body></html>"
//! );
//!
//! let article = extract("https://news.example/museum", &html)?;
//! assert_eq!(article.title, "Museum reopens");
//! assert!(article.content_text().contains("two-year renovation"));
//! # Ok::<(), rs_crux::Error>(())
//! ```
//!
//! ## How it works
//!
//! 1. Metadata comes from the page as parsed: `<meta>`/`<link>` tags, then JSON-LD.
//! 2. A copy of the body is preprocessed (scripts, styles, forms, comments and, on the first
//!    pass, chrome-looking elements removed).
//! 3. Every `p`, `ol`, `ul`, `td`, `pre` and `div` with enough text is weighed; the heaviest
//!    wins, or its parent when several heavy siblings share it.
//! 4. The winner's images are collected, then the winner is cleaned against tag and attribute
//!    whitelists and its URLs made absolute.
//! 5. If the first pass found too little text, steps 2 to 4 run again without the aggressive
//!    preprocessing.
//!
//! Extraction is synchronous and owns its data; concurrent extractions share nothing but the
//! compiled regexes.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Preprocessing, scoring, selection, image ranking and postprocessing.
pub mod extractor;

/// Metadata extraction (meta tags, link tags, JSON-LD).
pub mod metadata;

/// URL absolutization.
pub mod url_utils;

/// Character encoding detection and decoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::ArticleExtractor;
pub use options::{Options, PreprocessorOptions};
pub use patterns::{GRAVITY_ATTR, GRAVITY_SELECTOR};
pub use result::{Article, Image};

/// Extracts metadata and content from a page using default options.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when `html` is empty.
pub fn extract(url: &str, html: &str) -> Result<Article> {
    extract_with_options(url, html, Options::default())
}

/// Extracts metadata and content from a page with custom options.
///
/// # Example
///
/// ```rust
/// use rs_crux::{extract_with_options, Options};
///
/// let options = Options {
///     strip_unlikely_on_first_pass: false,
///     ..Options::default()
/// };
/// let article = extract_with_options("https://a.example/", "<p>short</p>", options)?;
/// assert!(article.is_empty());
/// # Ok::<(), rs_crux::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when `html` is empty.
pub fn extract_with_options(url: &str, html: &str, options: Options) -> Result<Article> {
    Ok(ArticleExtractor::with_options(url, html, options)?
        .extract_metadata()
        .extract_content()
        .into_article())
}

/// Extracts metadata and content from raw page bytes, detecting their encoding.
///
/// ```rust
/// use rs_crux::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head></html>";
/// let article = extract_bytes("https://a.example/", html)?;
/// assert_eq!(article.title, "Café");
/// # Ok::<(), rs_crux::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when `html` is empty.
pub fn extract_bytes(url: &str, html: &[u8]) -> Result<Article> {
    Ok(ArticleExtractor::from_bytes(url, html)?
        .extract_metadata()
        .extract_content()
        .into_article())
}
