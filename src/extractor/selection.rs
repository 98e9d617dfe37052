//! Best-node selection.
//!
//! A single pass over the candidates keeps the heaviest one and collects every high-ranked
//! candidate on the way. Afterwards, if several high-ranked candidates are siblings of the
//! winner, their common parent is selected instead: an article body is usually a flat run of
//! `<p>` elements, and the container is a better unit than any single paragraph.

use crate::dom::NodeRef;
use crate::extractor::scoring::{GravityScores, Scorer};

/// Candidates weighing at least this much are high-ranked.
pub const HIGH_RANK_WEIGHT: i32 = 50;

/// Once the best weight reaches this value the winner stops changing.
const WEIGHT_CEILING: i32 = 200;

/// The winner of one selection pass.
#[derive(Debug, Clone, Copy)]
pub struct Selected<'a> {
    /// The selected element.
    pub node: NodeRef<'a>,
    /// Weight of the best-scoring candidate (before any parent promotion).
    pub weight: i32,
    /// Whether the winner was replaced by its parent.
    pub coalesced: bool,
}

/// Score every candidate below `body` and pick the best element.
#[must_use]
pub fn select_best<'a>(body: &NodeRef<'a>, scores: &mut GravityScores) -> Option<Selected<'a>> {
    let scorer = Scorer;
    let mut max_weight = 0;
    let mut best: Option<NodeRef<'a>> = None;
    let mut high_ranked: Vec<NodeRef<'a>> = Vec::new();

    for candidate in scorer.candidates(body) {
        let weight = scorer.score(&candidate, scores);
        if weight >= HIGH_RANK_WEIGHT {
            high_ranked.push(candidate);
        }
        // Keep iterating past the ceiling so every high-ranked candidate is collected.
        if weight > max_weight && max_weight < WEIGHT_CEILING {
            max_weight = weight;
            best = Some(candidate);
        }
    }

    let best = best?;
    tracing::debug!(weight = max_weight, high_ranked = high_ranked.len(), "best candidate");

    Some(match coalesce_with_parent(&best, &high_ranked) {
        Some(parent) => Selected {
            node: parent,
            weight: max_weight,
            coalesced: true,
        },
        None => Selected {
            node: best,
            weight: max_weight,
            coalesced: false,
        },
    })
}

/// The winner's parent, when at least two other high-ranked candidates share it.
#[must_use]
pub fn coalesce_with_parent<'a>(best: &NodeRef<'a>, high_ranked: &[NodeRef<'a>]) -> Option<NodeRef<'a>> {
    if high_ranked.len() <= 2 {
        return None;
    }
    let parent = best.parent()?;
    let siblings = high_ranked
        .iter()
        .filter(|node| node.id != best.id)
        .filter(|node| node.parent().is_some_and(|p| p.id == parent.id))
        .count();
    (siblings > 1).then_some(parent)
}
