//! Binary-class entropy and information gain.
use crate::sample::{Attribute, Sample};


/// Returns the binary entropy of the label distribution of `samples`,
/// in `[0, 1]`: `0` for a pure set, `1` for a perfectly mixed one.
/// An empty set has entropy `0` by the `0·log2(0) = 0` convention.
#[inline]
pub fn entropy(samples: &[Sample]) -> f64 {
    let positive = samples.iter().filter(|s| s.label()).count();
    entropy_from_counts(positive, samples.len())
}


/// Entropy of a set of `total` samples of which `positive` are positive.
/// Shared with the split scan, which tracks counts incrementally
/// instead of re-partitioning for every candidate threshold.
#[inline]
pub(super) fn entropy_from_counts(positive: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let p = positive as f64 / total as f64;
    let q = 1.0 - p;

    -p * log2(p) - q * log2(q)
}


/// Returns the information gain of splitting `samples`
/// at `value ≤ threshold` on `attribute`:
/// the entropy of the whole set
/// minus the size-weighted entropy of the two sides.
/// Non-negative for every partition of a non-empty set,
/// and `0` exactly when the split leaves class impurity unchanged.
pub fn information_gain(
    samples: &[Sample],
    attribute: Attribute,
    threshold: f64,
) -> f64
{
    let total = samples.len();
    let total_positive = samples.iter().filter(|s| s.label()).count();

    let mut left = 0_usize;
    let mut left_positive = 0_usize;
    for sample in samples {
        if sample.value(attribute) <= threshold {
            left += 1;
            if sample.label() { left_positive += 1; }
        }
    }

    gain_from_counts(total_positive, total, left_positive, left)
}


/// Information gain from the class counts of the whole set
/// and of its left (`value ≤ threshold`) side.
#[inline]
pub(super) fn gain_from_counts(
    total_positive: usize,
    total: usize,
    left_positive: usize,
    left: usize,
) -> f64
{
    let right = total - left;
    let right_positive = total_positive - left_positive;

    let lp = left as f64 / total as f64;
    let rp = right as f64 / total as f64;

    let weighted = lp * entropy_from_counts(left_positive, left)
        + rp * entropy_from_counts(right_positive, right);

    entropy_from_counts(total_positive, total) - weighted
}


// `log2` with the entropy convention: zero maps to zero
// instead of reaching the undefined logarithm.
#[inline(always)]
fn log2(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x.log2()
    }
}
