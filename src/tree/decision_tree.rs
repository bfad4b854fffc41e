//! Defines the decision tree returned by the builder.
use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;

use crate::sample::Sample;
use super::node::DecisionNode;


/// A grown decision tree.
/// This struct is just a wrapper of [`DecisionNode`];
/// the root is exposed for structural traversal,
/// so export code can read every split's attribute and threshold
/// and every leaf's label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    root: DecisionNode,
}


impl From<DecisionNode> for DecisionTree {
    #[inline]
    fn from(root: DecisionNode) -> Self {
        Self { root }
    }
}


impl DecisionTree {
    /// The root node.
    #[inline]
    pub fn root(&self) -> &DecisionNode {
        &self.root
    }


    /// Predict the label of `sample`.
    /// See [`DecisionNode::predict`].
    #[inline]
    pub fn predict(&self, sample: &Sample) -> bool {
        self.root.predict(sample)
    }


    /// Returns the number of leaves of this tree.
    #[inline]
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Returns the depth of this tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Render the tree as Mermaid diagram text.
    /// Paste the output into a Mermaid renderer to visualize the tree.
    pub fn to_mermaid(&self) -> String {
        let mut out = String::from("graph TD\n");

        let info = self.root.mermaid_info(1).0;
        info.into_iter()
            .for_each(|line| out.push_str(&line));

        out
    }


    /// Write the Mermaid diagram text to a file.
    #[inline]
    pub fn write_mermaid<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>,
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_mermaid().as_bytes())?;

        Ok(())
    }
}
