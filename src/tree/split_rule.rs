//! This file defines the splitting rule of branch nodes.
use serde::{Serialize, Deserialize};

use crate::sample::{Attribute, Sample};


/// The output of the function `apply` of `SplitRule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LR {
    /// The sample goes to the left child (`value ≤ threshold`).
    Left,
    /// The sample goes to the right child (`value > threshold`).
    Right,
}


/// A binary splitting rule:
/// an attribute and a threshold on its value.
/// The threshold is stored numerically exact;
/// rounding happens only at display time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitRule {
    pub(crate) attribute: Attribute,
    pub(crate) threshold: f64,
}


impl SplitRule {
    #[inline]
    pub(crate) fn new(attribute: Attribute, threshold: f64) -> Self {
        Self { attribute, threshold }
    }


    /// The attribute this rule tests.
    #[inline]
    pub fn attribute(&self) -> Attribute {
        self.attribute
    }


    /// The threshold this rule compares against.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }


    /// Defines the splitting.
    #[inline]
    pub fn apply(&self, sample: &Sample) -> LR {
        let value = sample.value(self.attribute);

        if value <= self.threshold {
            LR::Left
        } else {
            LR::Right
        }
    }
}
