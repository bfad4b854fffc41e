//! Exports the types most programs need.
//!
pub use crate::sample::{
    // Data model ------------------------------
    Attribute,
    Sample,

    // Raw inputs
    WeatherRecord,
    CalendarEvent,

    // Loading & composition
    read_weather_csv,
    parse_weather,
    read_calendar,
    parse_calendar,
    compose,
    stratified_split,
};


pub use crate::tree::{
    // The tree and its nodes ------------------
    DecisionTree,
    DecisionNode,
    SplitNode,
    LeafNode,

    // Induction
    TreeBuilder,
    MIN_SPLIT,

    // Splitting rule
    SplitRule,
    LR,

    // Impurity measures
    entropy,
    information_gain,
};


pub use crate::metrics::Diagnostics;
