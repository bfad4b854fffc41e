//! Defines the inner representation of the decision tree.
use serde::{Serialize, Deserialize};

use crate::sample::{Attribute, Sample};
use super::split_rule::{SplitRule, LR};


/// Enumeration of `SplitNode` and `LeafNode`.
///
/// A decision tree is a value of this type:
/// every node exclusively owns its children,
/// so the structure is a tree, never a graph,
/// and it is immutable once the builder returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DecisionNode {
    /// An internal node that tests an attribute against a threshold
    /// and has exactly two children.
    Split(SplitNode),

    /// A terminal node that predicts a fixed label.
    Leaf(LeafNode),
}


/// Represents the internal nodes of the decision tree.
/// Each `SplitNode` must have two children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitNode {
    pub(super) rule: SplitRule,
    pub(super) left: Box<DecisionNode>,
    pub(super) right: Box<DecisionNode>,
}


/// Represents the leaf nodes of the decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) label: bool,
}


impl DecisionNode {
    /// A leaf predicting `label`.
    #[inline]
    pub(crate) fn leaf(label: bool) -> Self {
        Self::Leaf(LeafNode { label })
    }


    /// A split applying `rule` with the given children.
    #[inline]
    pub(crate) fn split(
        rule: SplitRule,
        left: DecisionNode,
        right: DecisionNode,
    ) -> Self
    {
        Self::Split(SplitNode {
            rule,
            left: Box::new(left),
            right: Box::new(right),
        })
    }


    /// Predict the label of `sample` by walking the tree:
    /// at every split, `value ≤ threshold` descends left,
    /// anything greater descends right,
    /// until a leaf returns its fixed label.
    #[inline]
    pub fn predict(&self, sample: &Sample) -> bool {
        match self {
            Self::Split(node) => node.predict(sample),
            Self::Leaf(node) => node.label(),
        }
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Self::Split(node) => node.left.leaves() + node.right.leaves(),
            Self::Leaf(_) => 1,
        }
    }


    /// Returns the depth of this sub-tree.
    /// A single leaf has depth `1`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Split(node) => {
                1 + node.left.depth().max(node.right.depth())
            },
            Self::Leaf(_) => 1,
        }
    }


    /// Emit the Mermaid lines of this sub-tree.
    /// `id` numbers this node; the returned value is the last id used,
    /// so the caller can keep numbering dense across siblings.
    pub(super) fn mermaid_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Leaf(leaf) => {
                let line = format!("{id}[{}]\n", class_name(leaf.label));
                (vec![line], id)
            },
            Self::Split(split) => {
                let left_id = id + 1;
                let (mut info, last) = split.left.mermaid_info(left_id);
                let right_id = last + 1;

                // Thresholds are rounded for display only;
                // the node keeps the exact value.
                info.push(format!(
                    "{id}{{\"{feat} <= {thr}\" ?}}\n",
                    feat = split.rule.attribute.name(),
                    thr = rounded(split.rule.threshold),
                ));
                info.push(format!("{id}-- Yes -->{left_id}\n"));
                info.push(format!("{id}-- No -->{right_id}\n"));

                let (r_info, last) = split.right.mermaid_info(right_id);
                info.extend(r_info);

                (info, last)
            },
        }
    }
}


impl SplitNode {
    /// The attribute this split tests.
    #[inline]
    pub fn attribute(&self) -> Attribute {
        self.rule.attribute()
    }


    /// The threshold this split compares against, numerically exact.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.rule.threshold()
    }


    /// The splitting rule itself.
    #[inline]
    pub fn rule(&self) -> &SplitRule {
        &self.rule
    }


    /// The child taking samples with `value ≤ threshold`.
    #[inline]
    pub fn left(&self) -> &DecisionNode {
        &self.left
    }


    /// The child taking samples with `value > threshold`.
    #[inline]
    pub fn right(&self) -> &DecisionNode {
        &self.right
    }


    #[inline]
    fn predict(&self, sample: &Sample) -> bool {
        match self.rule.apply(sample) {
            LR::Left => self.left.predict(sample),
            LR::Right => self.right.predict(sample),
        }
    }
}


impl LeafNode {
    /// The fixed label this leaf predicts.
    #[inline]
    pub fn label(&self) -> bool {
        self.label
    }
}


fn class_name(label: bool) -> &'static str {
    if label { "Fly" } else { "No fly" }
}


// Two-decimal display rounding without a trailing zero tail,
// matching the diagram output of the report files.
fn rounded(threshold: f64) -> f64 {
    (threshold * 100.0).round() / 100.0
}
