#![warn(missing_docs)]

//!
//! A crate that induces go/no-go flight decision trees from weather history.
//!
//! The training pipeline has three stages:
//!
//! - Loading
//!     Historical weather readings come from a semicolon-separated CSV,
//!     flight outcomes from an ICS calendar export.
//!     [`compose`](crate::sample::compose) joins the two by calendar day
//!     into labeled [`Sample`]s:
//!     a day is positive if its flights were flown,
//!     negative if any of them was cancelled.
//!
//! - Induction
//!     [`TreeBuilder`] grows a binary decision tree by recursive splitting.
//!     At every node it scans all six weather attributes for the
//!     threshold maximizing information gain,
//!     partitions the samples at that threshold,
//!     and recurses until the partitions are pure or too small to split.
//!
//! - Evaluation
//!     [`Diagnostics`] compares tree predictions against true labels
//!     and reports accuracy, precision, recall, and F1.
//!     The tree itself renders to Mermaid diagram text for inspection.

pub mod sample;
pub mod tree;
pub mod metrics;
pub mod export;
pub mod prelude;

mod checker;

pub use sample::{
    Attribute,
    Sample,
    WeatherRecord,
    CalendarEvent,
};

pub use tree::{
    DecisionNode,
    SplitNode,
    LeafNode,
    SplitRule,
    LR,
    DecisionTree,
    TreeBuilder,
    MIN_SPLIT,
};

pub use metrics::Diagnostics;
