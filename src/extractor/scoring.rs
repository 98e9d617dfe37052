//! Candidate enumeration and weighting.
//!
//! Every `p`, `ol`, `ul`, `td`, `pre` and `div` below the body with enough text becomes a
//! candidate. Its weight fuses five signals:
//!
//! | signal | source |
//! |---|---|
//! | tag | [`tag_weight`] |
//! | class and id | `+40` positive, `-50` negative, independently |
//! | text density | sentence separators in own text, long `<p>` children |
//! | children | `+3` per non-trivial `<p>` child |
//! | own text | `len / 10` of mostly-letter direct text |
//!
//! Weights are recorded in a [`GravityScores`] side table keyed by node id rather than written
//! into the DOM.

use std::collections::HashMap;

use dom_query::NodeId;

use crate::dom::{self, NodeRef, Selection};
use crate::extractor::keep::KeepPolicy;
use crate::patterns::{tag_weight, CANDIDATE_TAGS, GRAVITY_ATTR, NEGATIVE_CSS, POSITIVE_CSS};
use crate::url_utils::count_letters;

/// Candidates with less non-whitespace text than this are skipped unless they hold an image
/// or a heading.
const MIN_CANDIDATE_TEXT: usize = 50;

/// A `<p>` child needs this much text to count towards its parent.
const MIN_CHILD_PARAGRAPH_TEXT: usize = 25;

const MAX_SEPARATOR_WEIGHT: i32 = 10;
const MAX_PARAGRAPH_DENSITY_WEIGHT: i32 = 3;
const CHILD_PARAGRAPH_WEIGHT: i32 = 3;
const MAX_CHILDREN_WEIGHT: i32 = 30;

const POSITIVE_CSS_WEIGHT: i32 = 40;
const NEGATIVE_CSS_WEIGHT: i32 = -50;

/// Images below 33px do not make a short candidate worth scoring.
const SCORING_SMALL_IMAGE: i32 = 33;

/// Gravity scores of the candidates of one extraction pass.
#[derive(Debug, Default, Clone)]
pub struct GravityScores {
    scores: HashMap<NodeId, i32>,
}

impl GravityScores {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest weight computed for a node.
    pub fn set(&mut self, node: &NodeRef, weight: i32) {
        self.scores.insert(node.id, weight);
    }

    /// The recorded weight, if the node was scored.
    #[must_use]
    pub fn get(&self, node: &NodeRef) -> Option<i32> {
        self.scores.get(&node.id).copied()
    }

    /// Number of scored nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether nothing was scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Write every score below `root` onto the DOM as a `gravityScore` attribute.
    ///
    /// Debugging aid; the attribute whitelist removes these again during postprocessing.
    pub fn annotate(&self, root: &NodeRef) {
        for node in dom::descendant_elements(root) {
            if let Some(score) = self.get(&node) {
                node.set_attr(GRAVITY_ATTR, &score.to_string());
            }
        }
    }
}

/// Enumerates and weighs candidate elements.
#[derive(Debug, Default, Clone, Copy)]
pub struct Scorer;

impl KeepPolicy for Scorer {
    fn small_image_threshold(&self) -> i32 {
        SCORING_SMALL_IMAGE
    }
}

impl Scorer {
    /// Candidate elements below `body` in document order.
    #[must_use]
    pub fn candidates<'a>(&self, body: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
        Selection::from(*body)
            .select(CANDIDATE_TAGS)
            .nodes()
            .iter()
            .filter(|node| self.is_worth_scoring(node))
            .copied()
            .collect()
    }

    fn is_worth_scoring(&self, node: &NodeRef) -> bool {
        dom::stripped_text_len(node) >= MIN_CANDIDATE_TEXT
            || self.contains_image(node)
            || self.contains_heading(node)
    }

    /// Compute the weight of `element` and record it in `scores`.
    pub fn score(&self, element: &NodeRef, scores: &mut GravityScores) -> i32 {
        let weight = weight(element);
        scores.set(element, weight);
        weight
    }
}

/// Total weight of an element.
#[must_use]
pub fn weight(element: &NodeRef) -> i32 {
    weight_by_tag(element)
        + weight_by_class_and_id(element)
        + weight_by_text_density(element)
        + weight_by_children(element)
        + weight_by_own_text(element)
}

/// Base weight of the element's tag.
#[must_use]
pub fn weight_by_tag(element: &NodeRef) -> i32 {
    dom::tag_name(element).map_or(0, |tag| tag_weight(&tag))
}

/// `+40` when class/id looks like content, `-50` when it looks like chrome; both can apply.
#[must_use]
pub fn weight_by_class_and_id(element: &NodeRef) -> i32 {
    let class_and_id = dom::class_and_id(element);
    let mut weight = 0;
    if POSITIVE_CSS.is_match(&class_and_id) {
        weight += POSITIVE_CSS_WEIGHT;
    }
    if NEGATIVE_CSS.is_match(&class_and_id) {
        weight += NEGATIVE_CSS_WEIGHT;
    }
    weight
}

/// Sentence separators in the element's own text plus the length of its long `<p>` children.
#[must_use]
pub fn weight_by_text_density(element: &NodeRef) -> i32 {
    let own = dom::own_text(element);
    let separators = own.chars().filter(|c| matches!(c, ',' | '.')).count();
    let mut weight = clamp_to_i32(separators).min(MAX_SEPARATOR_WEIGHT);

    for len in child_paragraph_lengths(element) {
        weight += clamp_to_i32(len / 100).min(MAX_PARAGRAPH_DENSITY_WEIGHT);
    }
    weight
}

/// `+3` per `<p>` child with non-trivial text, capped.
#[must_use]
pub fn weight_by_children(element: &NodeRef) -> i32 {
    let count = clamp_to_i32(child_paragraph_lengths(element).len());
    (count * CHILD_PARAGRAPH_WEIGHT).min(MAX_CHILDREN_WEIGHT)
}

/// `len / 10` of the element's direct text when at least half of it is letters.
#[must_use]
pub fn weight_by_own_text(element: &NodeRef) -> i32 {
    let own = dom::own_text(element);
    let len = own.chars().count();
    if len == 0 || count_letters(&own) * 2 < len {
        return 0;
    }
    clamp_to_i32(len / 10)
}

fn child_paragraph_lengths(element: &NodeRef) -> Vec<usize> {
    dom::element_children(element)
        .iter()
        .filter(|child| dom::has_tag(child, &["p"]))
        .map(dom::text_len)
        .filter(|len| *len >= MIN_CHILD_PARAGRAPH_TEXT)
        .collect()
}

fn clamp_to_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
