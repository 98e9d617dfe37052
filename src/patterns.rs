//! Compiled regex patterns and scoring tables for content extraction.
//!
//! All patterns are compiled once at first use using `LazyLock` and are read-only afterwards,
//! so concurrent extractions can share them freely.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Class / id signals
// =============================================================================

/// Matches class/id words that suggest main content.
pub static POSITIVE_CSS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)article|body|content|entry|hentry|h-entry|main|post|text|blog|story|instapaper_body",
    )
    .expect("POSITIVE_CSS regex")
});

/// Matches class/id words that suggest page chrome.
pub static NEGATIVE_CSS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)combx|comment|disqus|foot|header|menu|meta|nav|rss|shoutbox|sidebar|sponsor|ad-break|agegate|pagination|pager|popup|tweet|twitter|share|social|banner|promo|advert",
    )
    .expect("NEGATIVE_CSS regex")
});

/// Matches class/id words that mean "definitely not the article".
///
/// Used to veto a positive match when deciding whether a short paragraph survives.
pub static UNLIKELY_CSS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)combx|comment|community|disqus|extra|foot|header|menu|remark|rss|shoutbox|sidebar|sponsor|ad-break|agegate|pagination|pager|popup|tweet|twitter",
    )
    .expect("UNLIKELY_CSS regex")
});

// =============================================================================
// Postprocessing signals
// =============================================================================

/// Matches inline styles that hide an element. Whitespace around the colon is ignored.
pub static UNLIKELY_STYLES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)display\s*:\s*none|visibility\s*:\s*hidden").expect("UNLIKELY_STYLES regex")
});

/// Matches class names of editing widgets and share bars inside article bodies.
pub static UNLIKELY_CLASS_NAMES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"edit-page|mw-editsection|share").expect("UNLIKELY_CLASS_NAMES regex")
});

/// Matches image URLs that are decoration or tracking rather than article imagery.
pub static UNLIKELY_IMAGE_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)logo|icon|sprite|pixel|spacer|blank\.gif|avatar|badge|1x1|transparent")
        .expect("UNLIKELY_IMAGE_SRC regex")
});

// =============================================================================
// Gravity score
// =============================================================================

/// Attribute name under which a gravity score is written when annotating a DOM.
pub const GRAVITY_ATTR: &str = "gravityScore";

/// Selector matching annotated elements.
pub const GRAVITY_SELECTOR: &str = "[gravityScore]";

// =============================================================================
// Tag weights
// =============================================================================

/// Tags whose elements are enumerated as scoring candidates.
pub const CANDIDATE_TAGS: &str = "p, ol, ul, td, pre, div";

/// Base weight contributed by an element's tag.
#[must_use]
pub fn tag_weight(tag: &str) -> i32 {
    match tag {
        "p" => 30,
        "div" | "pre" | "td" | "blockquote" => 5,
        "address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" | "form" => -3,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th" => -5,
        _ => 0,
    }
}
