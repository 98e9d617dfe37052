//! Configuration options for article extraction.
//!
//! `PreprocessorOptions` gates the noise-removal passes that run before scoring.
//! `Options` controls the extractor as a whole: which preprocessing flags each pass uses and
//! when the fallback pass kicks in.

/// Flags for the passes that run on the body before candidates are scored.
///
/// # Example
///
/// ```rust
/// use rs_crux::PreprocessorOptions;
///
/// let options = PreprocessorOptions {
///     strip_unlikely_candidates: true,
///     ..PreprocessorOptions::default()
/// };
/// assert!(options.remove_scripts_styles_forms);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PreprocessorOptions {
    /// Remove elements whose class or id looks like page chrome.
    ///
    /// This often removes more than just chrome, so it is off by default.
    ///
    /// Default: `false`
    pub strip_unlikely_candidates: bool,

    /// Remove `<script>`, `<style>` and `<form>`; unwrap `<noscript>` holding images.
    ///
    /// Default: `true`
    pub remove_scripts_styles_forms: bool,

    /// Remove comment nodes.
    ///
    /// Default: `true`
    pub remove_comments: bool,
}

impl Default for PreprocessorOptions {
    fn default() -> Self {
        Self {
            strip_unlikely_candidates: false,
            remove_scripts_styles_forms: true,
            remove_comments: true,
        }
    }
}

/// Configuration options for [`ArticleExtractor`](crate::ArticleExtractor).
///
/// # Example
///
/// ```rust
/// use rs_crux::Options;
///
/// let options = Options {
///     min_article_text_length: 300,
///     ..Options::default()
/// };
/// assert!(options.strip_unlikely_on_first_pass);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Preprocessing flags shared by both passes.
    ///
    /// `preprocessor.strip_unlikely_candidates` is ignored here: the first pass takes it from
    /// `strip_unlikely_on_first_pass` and the fallback pass always disables it. Set it only
    /// when driving [`Pass`](crate::extractor::Pass) directly.
    ///
    /// Default: `PreprocessorOptions::default()`
    pub preprocessor: PreprocessorOptions,

    /// Strip unlikely candidates before the first scoring pass.
    ///
    /// Default: `true`
    pub strip_unlikely_on_first_pass: bool,

    /// Selections whose text is shorter than this trigger the fallback pass.
    ///
    /// Default: `500`
    pub min_article_text_length: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            preprocessor: PreprocessorOptions::default(),
            strip_unlikely_on_first_pass: true,
            min_article_text_length: 500,
        }
    }
}

impl Options {
    /// Preprocessing flags for the first, aggressive pass.
    #[must_use]
    pub fn first_pass(&self) -> PreprocessorOptions {
        PreprocessorOptions {
            strip_unlikely_candidates: self.strip_unlikely_on_first_pass,
            ..self.preprocessor
        }
    }

    /// Preprocessing flags for the fallback pass.
    #[must_use]
    pub fn fallback_pass(&self) -> PreprocessorOptions {
        PreprocessorOptions {
            strip_unlikely_candidates: false,
            ..self.preprocessor
        }
    }
}
