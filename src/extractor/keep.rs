//! "Is this element worth keeping" tests shared by preprocessing and postprocessing.
//!
//! Both phases ask the same questions (does it hold a real image, a heading, a content-looking
//! class) but disagree on what counts as a small image, so the threshold is the one thing an
//! implementor supplies.

use crate::dom::{self, NodeRef, Selection};
use crate::patterns::{NEGATIVE_CSS, POSITIVE_CSS, UNLIKELY_CSS};

/// Keep/drop judgements parameterised by the small-image threshold.
pub trait KeepPolicy {
    /// Images with a declared width or height below this many pixels count as small.
    fn small_image_threshold(&self) -> i32;

    /// Whether an `<img>` is small.
    ///
    /// Width is checked before height. A missing dimension is skipped; a malformed one ends the
    /// check with "not small", even if the other dimension is tiny.
    fn is_small_image(&self, image: &NodeRef) -> bool {
        let limit = self.small_image_threshold();
        for name in ["width", "height"] {
            let value = dom::attr(image, name);
            if value.is_empty() {
                continue;
            }
            match value.trim().parse::<i32>() {
                Ok(v) if v < limit => return true,
                Ok(_) => {}
                Err(_) => return false,
            }
        }
        false
    }

    /// Whether the first `<img>` below `element` (or `element` itself) is not small.
    fn contains_image(&self, element: &NodeRef) -> bool {
        if dom::has_tag(element, &["img"]) {
            return !self.is_small_image(element);
        }
        Selection::from(*element)
            .select("img")
            .nodes()
            .first()
            .is_some_and(|img| !self.is_small_image(img))
    }

    /// Whether `element` contains any heading.
    fn contains_heading(&self, element: &NodeRef) -> bool {
        Selection::from(*element)
            .select("h1, h2, h3, h4, h5, h6")
            .exists()
    }

    /// Whether a short-text element should survive the negative-score pass.
    fn should_keep_element(&self, element: &NodeRef) -> bool {
        dom::has_tag(element, &["td"])
            || self.contains_heading(element)
            || self.contains_image(element)
            || POSITIVE_CSS.is_match(&dom::class_and_id(element))
    }

    /// Whether an otherwise-removable top-level child should survive the short-paragraph pass.
    fn should_keep_short_paragraph(&self, node: &NodeRef) -> bool {
        if !node.is_element() {
            return false;
        }
        if self.contains_image(node) {
            return true;
        }
        let class_and_id = dom::class_and_id(node);
        POSITIVE_CSS.is_match(&class_and_id)
            && !UNLIKELY_CSS.is_match(&class_and_id)
            && !NEGATIVE_CSS.is_match(&class_and_id)
    }
}
