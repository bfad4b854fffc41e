//! Diagnostics of a grown tree over a labeled dataset.
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::checker;
use crate::sample::Sample;
use crate::tree::DecisionTree;


/// Contingency counts of predicted against true labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Counts {
    true_positive: usize,
    false_positive: usize,
    false_negative: usize,
    true_negative: usize,
}


impl Counts {
    fn observe(predicted: bool, truth: bool) -> Self {
        let mut counts = Self::default();
        match (predicted, truth) {
            (true, true)   => { counts.true_positive  += 1; },
            (true, false)  => { counts.false_positive += 1; },
            (false, true)  => { counts.false_negative += 1; },
            (false, false) => { counts.true_negative  += 1; },
        }
        counts
    }


    fn merge(self, other: Self) -> Self {
        Self {
            true_positive:  self.true_positive  + other.true_positive,
            false_positive: self.false_positive + other.false_positive,
            false_negative: self.false_negative + other.false_negative,
            true_negative:  self.true_negative  + other.true_negative,
        }
    }


    fn total(&self) -> usize {
        self.true_positive
            + self.false_positive
            + self.false_negative
            + self.true_negative
    }
}


/// Standard classification diagnostics of a tree over a dataset.
///
/// All four values are ratios in `[0, 1]`.
/// A ratio whose denominator is zero
/// (no positive prediction, no positive truth)
/// is reported as `0.0` rather than a NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Correct predictions over all predictions.
    pub accuracy: f64,
    /// True positives over predicted positives.
    pub precision: f64,
    /// True positives over actual positives.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f1: f64,
}


impl Diagnostics {
    /// Compare `tree`'s predictions against the true labels of
    /// `samples` and compute the four ratios.
    /// An empty dataset is a precondition violation and panics.
    pub fn measure(tree: &DecisionTree, samples: &[Sample]) -> Self {
        checker::check_evaluation_set(samples);

        let counts = samples.par_iter()
            .map(|sample| {
                Counts::observe(tree.predict(sample), sample.label())
            })
            .reduce(Counts::default, Counts::merge);

        let accuracy = (counts.true_positive + counts.true_negative) as f64
            / counts.total() as f64;
        let precision = ratio(
            counts.true_positive,
            counts.true_positive + counts.false_positive,
        );
        let recall = ratio(
            counts.true_positive,
            counts.true_positive + counts.false_negative,
        );
        let f1 = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };

        Self { accuracy, precision, recall, f1 }
    }
}


impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accuracy:  {:.2}%", self.accuracy * 100.0)?;
        writeln!(f, "Precision: {:.2}%", self.precision * 100.0)?;
        writeln!(f, "Recall:    {:.2}%", self.recall * 100.0)?;
        write!(f,   "F1:        {:.2}%", self.f1 * 100.0)
    }
}


#[inline]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
