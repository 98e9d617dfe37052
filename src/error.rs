//! Error types for rs-crux.
//!
//! Only construction can fail. Everything past the parser is total: passes that meet an
//! unexpected DOM shape skip work instead of returning an error.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTML handed to the extractor was empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A URL could not be resolved against the page URL.
    ///
    /// Only produced inside URL resolution; `absolutize` swallows it and keeps the input.
    #[error("malformed URL: {0}")]
    MalformedUrl(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
