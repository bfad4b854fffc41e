//! Gain-maximizing split search.
//!
//! Scanning the midpoints of adjacent distinct values in attribute-sorted
//! order is exact, not heuristic: under entropy gain the optimal binary
//! threshold for a continuous attribute always lies at such a midpoint.
use crate::sample::{Attribute, Sample};
use super::entropy::gain_from_counts;
use super::split_rule::SplitRule;


/// A candidate threshold for one attribute, with its gain.
#[derive(Debug, Clone, Copy)]
pub(super) struct Candidate {
    pub(super) threshold: f64,
    pub(super) gain: f64,
}


/// Returns the gain-maximizing `(attribute, threshold)` rule
/// over all six attributes, or `None` if every attribute is constant
/// across `samples` (no attribute has a usable threshold).
///
/// Attributes are evaluated sequentially in index order `0..6`
/// and a later attribute replaces the incumbent only on strictly
/// greater gain, so ties resolve to the lowest attribute index.
/// The sequential order also keeps the floating-point comparisons
/// bit-reproducible across runs.
pub(super) fn best_split(samples: &[Sample]) -> Option<SplitRule> {
    let mut best: Option<(Candidate, Attribute)> = None;

    for attribute in Attribute::ALL {
        let Some(candidate) = best_threshold(samples, attribute) else {
            continue;
        };

        match best {
            Some((incumbent, _)) if candidate.gain <= incumbent.gain => {},
            _ => { best = Some((candidate, attribute)); },
        }
    }

    best.map(|(candidate, attribute)| {
        SplitRule::new(attribute, candidate.threshold)
    })
}


/// Returns the gain-maximizing threshold for one attribute,
/// or `None` if the attribute is constant across `samples`.
///
/// The scan sorts the set by the attribute (stable, so input order is
/// preserved among equal values), walks adjacent pairs in ascending
/// order, skips equal-valued pairs, and takes the arithmetic midpoint
/// of every strictly differing pair as a candidate.
/// Only a strictly greater gain replaces the incumbent:
/// among equal-gain candidates the first found wins.
pub(super) fn best_threshold(
    samples: &[Sample],
    attribute: Attribute,
) -> Option<Candidate>
{
    let mut order = samples.iter().collect::<Vec<_>>();
    order.sort_by(|a, b| {
        a.value(attribute).partial_cmp(&b.value(attribute)).unwrap()
    });

    let total = order.len();
    let total_positive = order.iter().filter(|s| s.label()).count();

    // Class counts of the left side, maintained incrementally:
    // after step `i` the left side is `order[..=i]`.
    let mut left = 0_usize;
    let mut left_positive = 0_usize;

    let mut best: Option<Candidate> = None;

    for pair in order.windows(2) {
        left += 1;
        if pair[0].label() { left_positive += 1; }

        let lo = pair[0].value(attribute);
        let hi = pair[1].value(attribute);

        // No midpoint exists between equal values.
        if lo == hi { continue; }

        let threshold = (lo + hi) / 2.0;
        let gain = gain_from_counts(
            total_positive, total, left_positive, left
        );

        match best {
            Some(incumbent) if gain <= incumbent.gain => {},
            _ => { best = Some(Candidate { threshold, gain }); },
        }
    }

    best
}
