//! Forest construction and flattening into path records.

use chrono::Duration;
use hive_core::config::InfluenceConfig;
use hive_influence::{flatten_forest, Forest, InfluenceEngine, InteractionIndex, Seed, TreeBuilder};
use test_fixtures::{focal_row, ts};

fn builder() -> TreeBuilder {
    TreeBuilder::new(InfluenceConfig {
        time_threshold_ms: 10_000,
        vel_change_threshold: 1.0,
        ..InfluenceConfig::default()
    })
}

/// 5@100 ── 7@93
///      └── 9@95 ── 12@88
///              └── 13@90
fn branching() -> InteractionIndex {
    InteractionIndex::new(vec![
        focal_row(5, 9, 95, Some(2.0)),
        focal_row(5, 7, 93, Some(4.0)),
        focal_row(9, 12, 88, Some(1.5)),
        focal_row(9, 13, 90, Some(3.0)),
        focal_row(20, 21, 45, Some(2.0)),
    ])
    .unwrap()
}

#[test]
fn one_row_per_node_per_path() {
    let forest = Forest::build(&builder(), &branching(), &[Seed::at(5, ts(100))]).unwrap();
    let rows = flatten_forest(&forest);

    // Siblings are inserted in interaction start order.
    let paths: Vec<Vec<u64>> = (0..3)
        .map(|p| rows.iter().filter(|r| r.path_id == p).map(|r| r.bee_id).collect())
        .collect();
    assert_eq!(paths, vec![vec![5, 7], vec![5, 9, 12], vec![5, 9, 13]]);
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|r| r.tree_id == 0));
}

#[test]
fn paths_are_numbered_by_leaf_insertion() {
    // 5@100 ── 7@94 ── 12@90
    //      └── 9@95
    // Leaf 9 is inserted before leaf 12.
    let index = InteractionIndex::new(vec![
        focal_row(5, 7, 94, Some(2.0)),
        focal_row(5, 9, 95, Some(2.0)),
        focal_row(7, 12, 90, Some(2.0)),
    ])
    .unwrap();
    let forest = Forest::build(&builder(), &index, &[Seed::at(5, ts(100))]).unwrap();
    let rows = flatten_forest(&forest);

    let paths: Vec<Vec<u64>> = (0..2)
        .map(|p| rows.iter().filter(|r| r.path_id == p).map(|r| r.bee_id).collect())
        .collect();
    assert_eq!(paths, vec![vec![5, 9], vec![5, 7, 12]]);
}

#[test]
fn row_columns_describe_position_in_tree() {
    let forest = Forest::build(&builder(), &branching(), &[Seed::at(5, ts(100))]).unwrap();
    let rows = flatten_forest(&forest);

    let root = &rows[0];
    assert!(root.is_root && !root.is_leaf);
    assert_eq!((root.depth, root.parent, root.n_children), (0, None, 2));
    assert_eq!(root.time_gap, Duration::zero());

    let twelve = rows.iter().find(|r| r.bee_id == 12).unwrap();
    assert!(twelve.is_leaf && !twelve.is_root);
    assert_eq!((twelve.depth, twelve.parent, twelve.n_children), (2, Some(9), 0));
    assert_eq!(twelve.time_gap, Duration::seconds(7));
    assert_eq!(twelve.vel_change_parent, Some(1.5));
    assert_eq!(twelve.datetime, ts(88));

    let nine_rows: Vec<_> = rows.iter().filter(|r| r.bee_id == 9).collect();
    assert_eq!(nine_rows.len(), 2);
    assert!(nine_rows.iter().all(|r| r.n_children == 2 && r.time_gap == Duration::seconds(5)));
}

#[test]
fn trees_are_numbered_in_seed_order() {
    let seeds = [Seed::at(20, ts(50)), Seed::at(5, ts(100)), Seed::at(42, ts(10))];
    let forest = Forest::build(&builder(), &branching(), &seeds).unwrap();
    let rows = flatten_forest(&forest);

    let roots: Vec<_> = rows
        .iter()
        .filter(|r| r.is_root)
        .map(|r| (r.tree_id, r.bee_id))
        .collect();
    assert_eq!(roots.first(), Some(&(0, 20)));
    assert_eq!(roots.last(), Some(&(2, 42)));
    assert_eq!(rows.iter().filter(|r| r.tree_id == 1 && r.is_root).count(), 3);

    // Path ids restart for every tree.
    let lone = rows.iter().find(|r| r.tree_id == 2).unwrap();
    assert_eq!(lone.path_id, 0);
    assert!(lone.is_root && lone.is_leaf);
}

#[test]
fn parallel_forest_matches_sequential() {
    let seeds: Vec<_> = (90..=100).map(|s| Seed::at(5, ts(s))).collect();
    let parallel = flatten_forest(&Forest::build(&builder(), &branching(), &seeds).unwrap());
    let sequential =
        flatten_forest(&Forest::build_sequential(&builder(), &branching(), &seeds).unwrap());
    assert_eq!(parallel, sequential);
}

#[test]
fn time_gap_serializes_as_seconds() {
    let rows = InfluenceEngine::new(InfluenceConfig {
        time_threshold_ms: 10_000,
        vel_change_threshold: 1.0,
        ..InfluenceConfig::default()
    })
    .trace(vec![focal_row(5, 9, 95, Some(2.0))], &[Seed::at(5, ts(100))])
    .unwrap();

    let json = serde_json::to_value(&rows[1]).unwrap();
    assert_eq!(json["time_gap"], 5.0);
    assert_eq!(json["parent"], 5);
    assert_eq!(json["bee_id"], 9);

    let back: hive_influence::PathRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, rows[1]);
}

#[test]
fn sub_millisecond_time_gap_survives_serialization() {
    let mut row = InfluenceEngine::new(InfluenceConfig {
        time_threshold_ms: 10_000,
        vel_change_threshold: 1.0,
        ..InfluenceConfig::default()
    })
    .trace(vec![focal_row(5, 9, 95, Some(2.0))], &[Seed::at(5, ts(100))])
    .unwrap()
    .remove(1);
    row.time_gap = Duration::microseconds(1_500);

    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["time_gap"], 0.0015);
    let back: hive_influence::PathRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back.time_gap, Duration::microseconds(1_500));
}
