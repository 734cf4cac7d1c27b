use chrono::Duration;
use hive_core::config::InfluenceConfig;
use hive_core::models::FocalInteraction;
use hive_influence::{flatten_forest, Forest, InteractionIndex, Seed, TreeBuilder};
use proptest::prelude::*;
use test_fixtures::{focal_row, ts};

fn arb_rows() -> impl Strategy<Value = Vec<FocalInteraction>> {
    prop::collection::vec(
        (
            0u64..6,
            0u64..6,
            0i64..120,
            prop::option::weighted(0.8, -2.0f64..4.0),
        ),
        1..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(focal, other, start, vel)| focal_row(focal, other, start, vel))
            .collect()
    })
}

fn arb_config() -> impl Strategy<Value = InfluenceConfig> {
    (5u64..30, 0.0f64..2.0, 1usize..6, any::<bool>()).prop_map(
        |(thr_secs, vel, max_depth, forbid_revisits)| InfluenceConfig {
            time_threshold_ms: thr_secs * 1_000,
            vel_change_threshold: vel,
            time_stop: None,
            max_depth,
            forbid_revisits,
        },
    )
}

proptest! {
    #[test]
    fn trees_respect_time_and_velocity_bounds(
        rows in arb_rows(),
        config in arb_config(),
        entity in 0u64..6,
        at in 60i64..130,
    ) {
        let index = InteractionIndex::new(rows).unwrap();
        let threshold = Duration::milliseconds(config.time_threshold_ms as i64);
        let outcome = TreeBuilder::new(config.clone()).build(&index, &Seed::at(entity, ts(at)));
        let tree = &outcome.tree;

        prop_assert!(outcome.depth <= config.max_depth);
        for (idx, node) in tree.nodes() {
            let Some(parent) = tree.parent(idx) else {
                prop_assert_eq!(idx, tree.root());
                continue;
            };
            let parent = tree.node(parent);
            prop_assert_eq!(node.depth, parent.depth + 1);
            prop_assert!(parent.timestamp() - node.timestamp() <= threshold);
            prop_assert!(node.velocity_change_from_parent.is_some_and(|v| v > config.vel_change_threshold));
            if node.depth == 1 {
                prop_assert!(node.timestamp() <= parent.timestamp());
            } else {
                prop_assert!(node.timestamp() < parent.timestamp());
            }
            if config.forbid_revisits {
                prop_assert!(!tree.path_contains_entity(tree.parent(idx).unwrap(), node.entity_id()));
            }
        }
    }

    #[test]
    fn flattening_emits_every_path_in_full(
        rows in arb_rows(),
        config in arb_config(),
        seeds in prop::collection::vec((0u64..6, 60i64..130), 1..4),
    ) {
        let index = InteractionIndex::new(rows).unwrap();
        let seeds: Vec<_> = seeds.into_iter().map(|(e, t)| Seed::at(e, ts(t))).collect();
        let forest = Forest::build(&TreeBuilder::new(config), &index, &seeds).unwrap();
        let records = flatten_forest(&forest);

        let expected: usize = forest
            .trees()
            .iter()
            .map(|t| t.tree.paths_to_leaves().iter().map(Vec::len).sum::<usize>())
            .sum();
        prop_assert_eq!(records.len(), expected);

        let paths: usize = forest.trees().iter().map(|t| t.tree.leaves().len()).sum();
        prop_assert_eq!(records.iter().filter(|r| r.is_leaf).count(), paths);
        prop_assert_eq!(records.iter().filter(|r| r.is_root).count(), paths);
        for record in &records {
            prop_assert_eq!(record.is_root, record.depth == 0);
            prop_assert_eq!(record.is_root, record.parent.is_none());
            prop_assert!(record.time_gap >= Duration::zero());
        }
    }
}
