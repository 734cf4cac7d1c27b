use chrono::Duration;
use hive_core::models::TimelineItem;
use hive_episodes::segmenter::{GapPolicy, StreamSegmenter};
use proptest::prelude::*;
use test_fixtures::item;

/// Interleaved stream over a few pairs; each key's timestamps are non-decreasing.
fn arb_stream() -> impl Strategy<Value = Vec<TimelineItem>> {
    prop::collection::vec((0u64..4, 0i64..3_000, 0usize..3), 0..120).prop_map(|steps| {
        let mut clocks = [0i64; 4];
        steps
            .into_iter()
            .map(|(pair, advance, category)| {
                clocks[pair as usize] += advance;
                item(pair, pair + 10, clocks[pair as usize], ["a", "b", "c"][category])
            })
            .collect()
    })
}

fn arb_policy() -> impl Strategy<Value = GapPolicy> {
    (
        prop::option::of(100i64..4_000),
        prop::option::of(0i64..2_000),
        any::<bool>(),
    )
        .prop_map(|(gap, min, fill_gaps)| GapPolicy {
            min_gap: gap.map(Duration::milliseconds),
            min_event_duration: min.map(Duration::milliseconds),
            fill_gaps,
        })
}

proptest! {
    #[test]
    fn episodes_are_ordered_and_disjoint(items in arb_stream(), policy in arb_policy()) {
        let map = StreamSegmenter::with_policy(policy).segment(items).unwrap();
        for episodes in map.values() {
            prop_assert!(!episodes.is_empty());
            for episode in episodes {
                prop_assert!(episode.start <= episode.end);
            }
            for pair in episodes.windows(2) {
                prop_assert!(pair[0].end <= pair[1].start, "{:?} overlaps {:?}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn retained_episodes_meet_minimum_duration(items in arb_stream(), policy in arb_policy()) {
        let map = StreamSegmenter::with_policy(policy).segment(items).unwrap();
        if let Some(min) = policy.min_event_duration {
            for episode in map.values().flatten() {
                prop_assert!(episode.duration() >= min);
            }
        }
    }

    #[test]
    fn gaps_only_when_filling(items in arb_stream(), policy in arb_policy()) {
        let map = StreamSegmenter::with_policy(policy).segment(items).unwrap();
        if !policy.fill_gaps {
            prop_assert!(map.values().flatten().all(|e| !e.is_gap()));
        }
    }

    #[test]
    fn parallel_equals_streaming(items in arb_stream(), policy in arb_policy()) {
        let segmenter = StreamSegmenter::with_policy(policy);
        prop_assert_eq!(
            segmenter.segment(items.clone()).unwrap(),
            segmenter.segment_par(items).unwrap()
        );
    }
}
