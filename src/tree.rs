//! Defines decision-tree induction and the resulting tree.
mod entropy;
mod split_rule;
mod split;
mod node;
mod builder;
mod decision_tree;

pub use entropy::{entropy, information_gain};
pub use split_rule::{SplitRule, LR};
pub use node::{DecisionNode, SplitNode, LeafNode};
pub use builder::{TreeBuilder, MIN_SPLIT};
pub use decision_tree::DecisionTree;
