//! This file defines some functions that check some pre-conditions
//! E.g., non-emptiness of a training set

use crate::Sample;


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_training_set(samples: &[Sample]) {
    assert!(
        !samples.is_empty(),
        "The training set is empty. \
         A majority label is undefined over zero samples."
    );
}


/// Check whether a dataset handed to the diagnostics is usable.
#[inline(always)]
pub(crate) fn check_evaluation_set(samples: &[Sample]) {
    assert!(
        !samples.is_empty(),
        "Diagnostics over an empty sample set are undefined."
    );
}


/// Check whether the requested class counts fit the given population.
#[inline(always)]
pub(crate) fn check_class_counts(
    n_requested: usize,
    n_available: usize,
    class: &str,
)
{
    assert!(
        (1..=n_available).contains(&n_requested),
        "Requested {n_requested} {class} training examples, \
         but only {n_available} are available."
    );
}
