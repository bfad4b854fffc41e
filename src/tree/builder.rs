//! Defines the recursive tree-induction algorithm.
use crate::checker;
use crate::sample::Sample;
use super::node::DecisionNode;
use super::split::best_split;
use super::split_rule::LR;
use super::decision_tree::DecisionTree;


/// Sample sets smaller than this are never split further;
/// they become majority-label leaves.
pub const MIN_SPLIT: usize = 5;


/// A struct that builds a [`DecisionTree`].
/// `TreeBuilder` keeps the parameters for growing a tree.
///
/// # Example
///
/// ```no_run
/// use flightcall::prelude::*;
///
/// let records = read_weather_csv("data/weatherdata.csv").unwrap();
/// let events = read_calendar("data/reservations.ics").unwrap();
/// let samples = compose(&records, &events);
///
/// let tree = TreeBuilder::new().build(&samples);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder {
    min_split: usize,
}


impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}


impl TreeBuilder {
    /// Construct a builder with the default stopping size,
    /// [`MIN_SPLIT`].
    #[inline]
    pub fn new() -> Self {
        Self { min_split: MIN_SPLIT }
    }


    /// Override the stopping size:
    /// sets smaller than `min_split` become leaves.
    /// Default value is [`MIN_SPLIT`].
    pub fn min_split(mut self, min_split: usize) -> Self {
        assert!(min_split >= 2, "A set of less than 2 samples cannot split");
        self.min_split = min_split;

        self
    }


    /// Build a decision tree over `samples`.
    ///
    /// Purely functional over its input:
    /// the same sample order always yields the same tree.
    /// An empty training set is a precondition violation and panics.
    pub fn build(&self, samples: &[Sample]) -> DecisionTree {
        checker::check_training_set(samples);

        DecisionTree::from(self.grow(samples))
    }


    fn grow(&self, samples: &[Sample]) -> DecisionNode {
        // Stopping rule: too small to split, or already pure.
        if samples.len() < self.min_split || is_pure(samples) {
            return DecisionNode::leaf(majority_label(samples));
        }

        // An impure set can still be degenerate:
        // if every attribute is constant there is nothing to split on,
        // and the stopping rule extends to cover it.
        let Some(rule) = best_split(samples) else {
            return DecisionNode::leaf(majority_label(samples));
        };

        // The threshold is a midpoint of two values present in the set,
        // so both sides are non-empty and recursion strictly shrinks.
        let (left, right): (Vec<Sample>, Vec<Sample>) = samples.iter()
            .copied()
            .partition(|sample| rule.apply(sample) == LR::Left);

        // The partitions are disjoint and share no state,
        // so both subtrees grow in parallel.
        let (left, right) = rayon::join(
            || self.grow(&left),
            || self.grow(&right),
        );

        // Two leaves agreeing on the label make the split worthless;
        // collapse it so no such split survives in the output.
        if let (DecisionNode::Leaf(l), DecisionNode::Leaf(r)) = (&left, &right) {
            if l.label() == r.label() {
                return DecisionNode::leaf(l.label());
            }
        }

        DecisionNode::split(rule, left, right)
    }
}


/// Returns `true` if every sample shares one label.
#[inline]
fn is_pure(samples: &[Sample]) -> bool {
    let first = samples[0].label();
    samples.iter().all(|s| s.label() == first)
}


/// Returns the majority label of `samples`, ties broken toward `true`.
#[inline]
fn majority_label(samples: &[Sample]) -> bool {
    let positive = samples.iter().filter(|s| s.label()).count();
    let negative = samples.len() - positive;

    positive >= negative
}
