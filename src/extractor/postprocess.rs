//! Postprocessing: whitelist-driven cleanup of the selected article body.
//!
//! The passes run in this order, and it matters: each one assumes the shape the previous ones
//! left behind.
//!
//! 1. drop scored nodes with negative or too-short content
//! 2. turn line breaks into spaces
//! 3. drop hidden and widget nodes
//! 4. rename wrapper tags to `<p>`
//! 5. drop tags outside the paragraph whitelist
//! 6. drop top-level tags that are not paragraphs
//! 7. drop short top-level paragraphs
//! 8. drop attributes outside the attribute whitelist
//! 9. absolutize `href`, `src` and `srcset`

use crate::dom::{self, Document, NodeRef, Selection};
use crate::extractor::keep::KeepPolicy;
use crate::extractor::preprocess::is_attached_below;
use crate::extractor::scoring::GravityScores;
use crate::patterns::{UNLIKELY_CLASS_NAMES, UNLIKELY_STYLES};
use crate::url_utils::{absolutize, absolutize_srcset, count_letters};

/// Text shorter than this is not a paragraph.
pub const MIN_LENGTH_FOR_PARAGRAPHS: usize = 50;

/// Wrappers that are renamed to `<p>` so their content survives.
pub const REMOVE_TAGS_BUT_RETAIN_CONTENT: &[&str] = &[
    "font", "table", "tbody", "tr", "td", "div", "ol", "ul", "li", "span",
];

/// Tags allowed anywhere in the output.
pub const RETAIN_TAGS: &[&str] = &[
    "p", "b", "i", "u", "strong", "em", "a", "pre", "h1", "h2", "h3", "h4", "h5", "h6",
    "blockquote", "img", "br",
];

/// Tags allowed as direct children of the article root.
pub const RETAIN_TAGS_TOP_LEVEL: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "li",
];

/// Top-level tags whose text may be shorter than [`MIN_LENGTH_FOR_PARAGRAPHS`].
pub const TAGS_EXEMPT_FROM_MIN_LENGTH_CHECK: &[&str] = &[
    "b", "i", "u", "strong", "em", "a", "pre", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote",
];

/// The only attributes kept in the output.
pub const ATTRIBUTES_TO_RETAIN: &[&str] = &[
    "href", "title", "src", "srcset", "sizes", "alt", "width", "height", "cellspacing",
    "cellpadding",
];

/// Images below 20px do not save an element from removal here.
const POSTPROCESS_SMALL_IMAGE: i32 = 20;

/// Runs the postprocessing passes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Postprocessor;

impl KeepPolicy for Postprocessor {
    fn small_image_threshold(&self) -> i32 {
        POSTPROCESS_SMALL_IMAGE
    }
}

impl Postprocessor {
    /// Run every pass on `root` in order. Relative URLs resolve against `base_url`.
    pub fn postprocess(&self, root: &NodeRef, scores: &GravityScores, base_url: &str) {
        tracing::debug!(scored = scores.len(), "postprocess");

        self.remove_nodes_with_negative_scores(root, scores);
        replace_line_breaks_with_spaces(root);
        remove_unlikely_child_nodes(root);
        remove_tags_but_retain_content(root);
        remove_tags_not_likely_to_be_paragraphs(root);
        remove_top_level_tags_not_likely_to_be_paragraphs(root);
        self.remove_short_paragraphs(root);
        remove_disallowed_attributes(root);
        make_urls_absolute(root, base_url);
    }

    /// Drop scored descendants whose score is negative, or whose text is short and which hold
    /// nothing worth keeping.
    pub fn remove_nodes_with_negative_scores(&self, root: &NodeRef, scores: &GravityScores) {
        for node in dom::descendant_elements(root) {
            let Some(score) = scores.get(&node) else {
                continue;
            };
            if !is_attached_below(&node, root) {
                continue;
            }
            if score < 0
                || (dom::text_len(&node) < MIN_LENGTH_FOR_PARAGRAPHS
                    && !self.should_keep_element(&node))
            {
                dom::remove(&node, "remove_nodes_with_negative_scores");
            }
        }
    }

    /// Drop top-level children, last to first, that are empty, too short for their tag, or
    /// mostly non-letters, unless they carry an image or a content-looking class.
    pub fn remove_short_paragraphs(&self, root: &NodeRef) {
        for child in root.children().into_iter().rev() {
            let (text, exempt) = if child.is_text() {
                (dom::normalize_whitespace(&child.text()), false)
            } else if child.is_element() {
                (
                    dom::text(&child),
                    dom::has_tag(&child, TAGS_EXEMPT_FROM_MIN_LENGTH_CHECK),
                )
            } else {
                (String::new(), false)
            };

            let len = text.chars().count();
            let removable = text.is_empty()
                || (!exempt && len < MIN_LENGTH_FOR_PARAGRAPHS)
                || len > 2 * count_letters(&text);

            if removable && !self.should_keep_short_paragraph(&child) {
                dom::remove(&child, "remove_short_paragraphs");
            }
        }
    }
}

/// Collapse `<br><br>` pairs, then put a space where each remaining `<br>` sits.
pub fn replace_line_breaks_with_spaces(root: &NodeRef) {
    let selection = Selection::from(*root);
    for br in selection.select("br + br").nodes() {
        dom::remove(br, "replace_line_breaks_with_spaces");
    }
    for br in selection.select("br").nodes() {
        if let Some(prev) = br.prev_sibling() {
            dom::insert_text_after(&prev, " ");
        } else if let Some(parent) = br.parent() {
            dom::append_text(&parent, " ");
        }
    }
}

/// Recursively drop elements hidden by inline style or marked as editing/sharing widgets.
pub fn remove_unlikely_child_nodes(element: &NodeRef) {
    for child in dom::element_children(element) {
        if is_unlikely(&child) {
            dom::remove(&child, "remove_unlikely_child_nodes");
        } else {
            remove_unlikely_child_nodes(&child);
        }
    }
}

fn is_unlikely(element: &NodeRef) -> bool {
    UNLIKELY_STYLES.is_match(&dom::attr(element, "style"))
        || UNLIKELY_CLASS_NAMES.is_match(&dom::attr(element, "class"))
}

/// Rename wrapper elements to `<p>`, innermost first.
pub fn remove_tags_but_retain_content(element: &NodeRef) {
    for child in dom::element_children(element) {
        remove_tags_but_retain_content(&child);
        if dom::has_tag(&child, REMOVE_TAGS_BUT_RETAIN_CONTENT) {
            tracing::info!(
                pass = "remove_tags_but_retain_content",
                tag = dom::tag_name(&child).as_deref().unwrap_or_default(),
                "renaming to p"
            );
            dom::rename(&child, "p");
        }
    }
}

/// Recursively drop every element outside [`RETAIN_TAGS`].
pub fn remove_tags_not_likely_to_be_paragraphs(element: &NodeRef) {
    for child in dom::element_children(element) {
        if dom::has_tag(&child, RETAIN_TAGS) {
            remove_tags_not_likely_to_be_paragraphs(&child);
        } else {
            dom::remove(&child, "remove_tags_not_likely_to_be_paragraphs");
        }
    }
}

/// Drop direct children outside [`RETAIN_TAGS_TOP_LEVEL`]. Inline tags survive only inside a
/// paragraph.
pub fn remove_top_level_tags_not_likely_to_be_paragraphs(root: &NodeRef) {
    for child in dom::element_children(root) {
        if !dom::has_tag(&child, RETAIN_TAGS_TOP_LEVEL) {
            dom::remove(&child, "remove_top_level_tags_not_likely_to_be_paragraphs");
        }
    }
}

/// Strip every attribute outside [`ATTRIBUTES_TO_RETAIN`] from `root` and its descendants.
pub fn remove_disallowed_attributes(root: &NodeRef) {
    strip_attributes(root);
    for node in dom::descendant_elements(root) {
        strip_attributes(&node);
    }
}

fn strip_attributes(node: &NodeRef) {
    for name in dom::attribute_names(node) {
        if !ATTRIBUTES_TO_RETAIN.contains(&name.as_str()) {
            node.remove_attr(&name);
        }
    }
}

/// Rewrite `href`, `src` and (on elements with `src`) `srcset` as absolute URLs.
pub fn make_urls_absolute(root: &NodeRef, base_url: &str) {
    let selection = Selection::from(*root);
    for node in selection.select("[href]").nodes() {
        let href = dom::attr(node, "href");
        node.set_attr("href", &absolutize(&href, base_url));
    }
    for node in selection.select("[src]").nodes() {
        let src = dom::attr(node, "src");
        node.set_attr("src", &absolutize(&src, base_url));

        let srcset = dom::attr(node, "srcset");
        if !srcset.is_empty() {
            node.set_attr("srcset", &absolutize_srcset(&srcset, base_url));
        }
    }
}

/// Turn `doc` into the output document: the children of `root` become the children of
/// `<body>`, everything else is dropped.
///
/// The children are moved within the same tree, so nested structure survives exactly.
pub fn into_output_document(doc: &Document, root: &NodeRef) {
    let Some(body) = dom::body(doc) else {
        return;
    };

    if root.id != body.id {
        let content = root.children();
        for child in body.children() {
            child.remove_from_parent();
        }
        for child in content {
            child.remove_from_parent();
            body.append_child(&child);
        }
    }

    for child in doc.select("head").nodes().iter().flat_map(NodeRef::children) {
        child.remove_from_parent();
    }
    if let Some(html) = doc.select("html").nodes().first() {
        strip_all_attributes(html);
    }
    strip_all_attributes(&body);
}

fn strip_all_attributes(node: &NodeRef) {
    for name in dom::attribute_names(node) {
        node.remove_attr(&name);
    }
}
