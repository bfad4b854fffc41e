use flightcall::prelude::*;


// A day where only the temperature matters.
fn day(max_temp: f64, label: bool) -> Sample {
    Sample::new(max_temp, 50.0, 0.0, 9999.0, 180.0, 10.0, label)
}


// A day where temperature and cloud cover vary.
fn sky(max_temp: f64, cloud_cover: f64, label: bool) -> Sample {
    Sample::new(max_temp, cloud_cover, 0.0, 9999.0, 180.0, 10.0, label)
}


#[test]
fn splits_at_the_midpoint_of_the_class_boundary() {
    let samples = vec![
        day(10.0, false), day(10.0, false),
        day(20.0, false), day(20.0, false),
        day(30.0, true), day(30.0, true),
        day(40.0, true), day(40.0, true),
    ];

    let tree = TreeBuilder::new().build(&samples);

    let DecisionNode::Split(split) = tree.root() else {
        panic!("expected a split at the root");
    };
    assert_eq!(split.attribute(), Attribute::MaxTemp);
    assert_eq!(split.threshold(), 25.0);

    let DecisionNode::Leaf(left) = split.left() else {
        panic!("expected a leaf on the left");
    };
    let DecisionNode::Leaf(right) = split.right() else {
        panic!("expected a leaf on the right");
    };
    assert!(!left.label());
    assert!(right.label());
}


#[test]
fn four_samples_split_when_the_stopping_size_allows() {
    let samples = vec![
        day(10.0, false),
        day(20.0, false),
        day(30.0, true),
        day(40.0, true),
    ];

    let tree = TreeBuilder::new()
        .min_split(2)
        .build(&samples);

    let DecisionNode::Split(split) = tree.root() else {
        panic!("expected a split at the root");
    };
    assert_eq!(split.attribute(), Attribute::MaxTemp);
    assert_eq!(split.threshold(), 25.0);
    assert!(split.left().is_leaf());
    assert!(split.right().is_leaf());
}


#[test]
fn pure_sets_become_a_single_leaf() {
    let samples = (0..5)
        .map(|i| day(10.0 * i as f64, true))
        .collect::<Vec<_>>();

    let tree = TreeBuilder::new().build(&samples);

    assert!(tree.root().is_leaf());
    assert_eq!(tree.leaves(), 1);
    assert!(tree.predict(&day(0.0, false)));
}


#[test]
fn small_sets_take_the_majority_label() {
    let samples = vec![
        day(10.0, true),
        day(20.0, true),
        day(30.0, false),
    ];

    let tree = TreeBuilder::new().build(&samples);

    assert!(tree.root().is_leaf());
    assert!(tree.predict(&day(30.0, false)));
}


#[test]
fn majority_ties_resolve_positive() {
    let samples = vec![
        day(10.0, true),
        day(20.0, true),
        day(30.0, false),
        day(40.0, false),
    ];

    let tree = TreeBuilder::new().build(&samples);

    assert!(tree.root().is_leaf());
    assert!(tree.predict(&day(40.0, false)));
}


#[test]
fn worthless_splits_collapse_into_one_leaf() {
    // Two value groups with identical label mixtures:
    // the only available split has zero gain and both subtrees
    // resolve to the same majority leaf, so nothing may survive it.
    let mut samples = Vec::new();
    for value in [1.0, 2.0] {
        samples.push(day(value, true));
        samples.push(day(value, true));
        samples.push(day(value, true));
        samples.push(day(value, true));
        samples.push(day(value, false));
        samples.push(day(value, false));
    }

    let tree = TreeBuilder::new().build(&samples);

    assert!(tree.root().is_leaf());
    assert_eq!(tree.leaves(), 1);
    assert!(tree.predict(&day(1.0, false)));
}


#[test]
fn impure_but_constant_sets_fall_back_to_the_majority() {
    // Six identical samples with mixed labels:
    // no attribute offers a midpoint, yet the build must not fail.
    let samples = vec![
        day(10.0, true),
        day(10.0, true),
        day(10.0, false),
        day(10.0, false),
        day(10.0, false),
        day(10.0, false),
    ];

    let tree = TreeBuilder::new().build(&samples);

    assert!(tree.root().is_leaf());
    assert!(!tree.predict(&day(10.0, true)));
}


#[test]
fn prediction_follows_the_threshold_rule() {
    let samples = vec![
        day(10.0, false), day(10.0, false),
        day(20.0, false), day(20.0, false),
        day(30.0, true), day(30.0, true),
        day(40.0, true), day(40.0, true),
    ];

    let tree = TreeBuilder::new().build(&samples);

    // The boundary itself goes left.
    assert!(!tree.predict(&day(24.9, true)));
    assert!(!tree.predict(&day(25.0, true)));
    assert!(tree.predict(&day(25.1, false)));
}


#[test]
fn separable_data_is_fully_learned() {
    // Label rule: warm enough and not too cloudy.
    let samples = vec![
        sky(10.0, 20.0, false),
        sky(12.0, 80.0, false),
        sky(14.0, 30.0, false),
        sky(20.0, 90.0, false),
        sky(25.0, 70.0, false),
        sky(16.0, 45.0, true),
        sky(18.0, 20.0, true),
        sky(22.0, 30.0, true),
        sky(28.0, 40.0, true),
        sky(30.0, 10.0, true),
    ];

    let tree = TreeBuilder::new()
        .min_split(2)
        .build(&samples);

    for sample in &samples {
        assert_eq!(tree.predict(sample), sample.label());
    }
    assert!(tree.depth() > 2, "two attributes must both be in play");
}


#[test]
fn rebuilding_yields_an_identical_tree() {
    let samples = vec![
        sky(10.0, 20.0, false),
        sky(12.0, 80.0, false),
        sky(14.0, 30.0, false),
        sky(20.0, 90.0, false),
        sky(25.0, 70.0, false),
        sky(16.0, 45.0, true),
        sky(18.0, 20.0, true),
        sky(22.0, 30.0, true),
        sky(28.0, 40.0, true),
        sky(30.0, 10.0, true),
    ];

    let first = TreeBuilder::new().min_split(2).build(&samples);
    let second = TreeBuilder::new().min_split(2).build(&samples);

    assert_eq!(first, second);
}


#[test]
fn mermaid_output_renders_every_leaf() {
    let samples = vec![
        day(10.0, false), day(10.0, false),
        day(20.0, false), day(20.0, false),
        day(30.0, true), day(30.0, true),
        day(40.0, true), day(40.0, true),
    ];

    let tree = TreeBuilder::new().build(&samples);
    let diagram = tree.to_mermaid();

    assert!(diagram.starts_with("graph TD\n"));
    assert!(diagram.contains("Max temperature (°C) <= 25"));
    assert!(diagram.contains("[No fly]"));
    assert!(diagram.contains("[Fly]"));
    assert!(diagram.contains("-- Yes -->"));
    assert!(diagram.contains("-- No -->"));
}


#[test]
#[should_panic]
fn empty_training_sets_are_rejected() {
    TreeBuilder::new().build(&[]);
}


#[test]
#[should_panic]
fn attribute_indices_out_of_range_fail_loudly() {
    day(0.0, true).at(6);
}
