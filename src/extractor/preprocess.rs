//! Preprocessing: noise removal on the cloned body before scoring.
//!
//! Passes run in a fixed order, each gated by its [`PreprocessorOptions`] flag:
//! unlikely-candidate stripping, script/style/form removal, comment removal.

use crate::dom::{self, NodeRef, Selection};
use crate::extractor::keep::KeepPolicy;
use crate::options::PreprocessorOptions;
use crate::patterns::{NEGATIVE_CSS, POSITIVE_CSS};

/// Images below 33px in either declared dimension do not protect their container.
const PREPROCESS_SMALL_IMAGE: i32 = 33;

/// Runs the preprocessing passes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Preprocessor;

impl KeepPolicy for Preprocessor {
    fn small_image_threshold(&self) -> i32 {
        PREPROCESS_SMALL_IMAGE
    }
}

impl Preprocessor {
    /// Apply every enabled pass to `body` in place.
    pub fn preprocess(&self, body: &NodeRef, options: &PreprocessorOptions) {
        tracing::debug!(?options, "preprocess");

        if options.strip_unlikely_candidates {
            self.strip_unlikely_candidates(body);
        }
        if options.remove_scripts_styles_forms {
            remove_scripts_styles_forms(body);
        }
        if options.remove_comments {
            remove_comments(body);
        }
    }

    /// Remove descendants whose class/id looks like chrome and not like content, unless they
    /// hold a real image.
    pub fn strip_unlikely_candidates(&self, element: &NodeRef) {
        for child in dom::descendant_elements(element) {
            // An ancestor may already be gone.
            if !is_attached_below(&child, element) {
                continue;
            }
            let class_and_id = dom::class_and_id(&child);
            if NEGATIVE_CSS.is_match(&class_and_id)
                && !POSITIVE_CSS.is_match(&class_and_id)
                && !self.contains_image(&child)
            {
                dom::remove(&child, "strip_unlikely_candidates");
            }
        }
    }
}

/// Drop `<script>`, `<style>` and `<form>`. A `<noscript>` holding an image is unwrapped so the
/// image survives; any other `<noscript>` is dropped.
///
/// `<noscript>` goes first so that markup it releases is cleaned like the rest.
pub fn remove_scripts_styles_forms(element: &NodeRef) {
    let root = Selection::from(*element);

    for noscript in root.select("noscript").nodes() {
        if !is_attached_below(noscript, element) {
            continue;
        }
        let noscript_sel = Selection::from(*noscript);
        if noscript_sel.select("img").exists() {
            dom::unwrap(noscript);
        } else if noscript_sel.text().contains("<img") {
            // Parsed with scripting on, the content is raw text; parse it for real.
            let markup = noscript_sel.text().to_string();
            tracing::info!(pass = "remove_scripts_styles_forms", "reparsing noscript image markup");
            noscript_sel.replace_with_html(markup.as_str());
        } else {
            dom::remove(noscript, "remove_scripts_styles_forms");
        }
    }

    for script in root.select("script").nodes() {
        dom::remove(script, "remove_scripts_styles_forms");
    }

    for style in root.select("style").nodes() {
        dom::remove(style, "remove_scripts_styles_forms");
    }

    for form in root.select("form").nodes() {
        if is_attached_below(form, element) {
            dom::remove(form, "remove_scripts_styles_forms");
        }
    }
}

/// Remove comment nodes below `node`, recursing into everything that stays.
pub fn remove_comments(node: &NodeRef) {
    for child in node.children() {
        if child.is_comment() {
            dom::remove(&child, "remove_comments");
        } else {
            remove_comments(&child);
        }
    }
}

/// Whether `node` is still connected to `root` through its parent chain.
pub(crate) fn is_attached_below(node: &NodeRef, root: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.id == root.id {
            return true;
        }
        current = parent.parent();
    }
    false
}
