//! Run-length segmentation of per-pair timelines into episodes.
//!
//! Items are processed in time order within a key; keys may interleave freely.
//! State lives in a [`SegmenterState`] owned by a single call.

pub mod gap_policy;
pub mod timeline;

use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;

use hive_core::config::SegmenterConfig;
use hive_core::errors::EpisodeError;
use hive_core::models::{Episode, PairKey, TimelineItem};
use hive_core::tracing_setup::events;

pub use gap_policy::{GapPolicy, Step, Transition};
pub use timeline::KeyTimeline;

/// Ordered episodes per pair key. Keys without surviving episodes are absent.
pub type EpisodeMap = BTreeMap<PairKey, Vec<Episode>>;

/// Per-call segmentation state: one timeline per key.
#[derive(Debug, Default)]
pub struct SegmenterState {
    timelines: HashMap<PairKey, KeyTimeline>,
    items: usize,
}

impl SegmenterState {
    pub fn push(&mut self, item: &TimelineItem, policy: &GapPolicy) -> Result<(), EpisodeError> {
        self.items += 1;
        self.timelines
            .entry(item.key)
            .or_default()
            .push(item, policy)
    }

    /// Close every timeline and collect the surviving episodes.
    pub fn finish(self, policy: &GapPolicy) -> EpisodeMap {
        let items = self.items;
        let map: EpisodeMap = self
            .timelines
            .into_iter()
            .map(|(key, timeline)| (key, timeline.finish(policy)))
            .filter(|(_, episodes)| !episodes.is_empty())
            .collect();
        events::segmentation_completed(items, map.len(), map.values().map(Vec::len).sum());
        map
    }
}

/// The stream segmenter.
#[derive(Debug, Clone)]
pub struct StreamSegmenter {
    policy: GapPolicy,
}

impl StreamSegmenter {
    pub fn new(config: &SegmenterConfig) -> Self {
        Self {
            policy: GapPolicy::from_config(config),
        }
    }

    pub fn with_policy(policy: GapPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &GapPolicy {
        &self.policy
    }

    /// Segment an interleaved stream. An empty stream yields an empty map.
    pub fn segment<I>(&self, items: I) -> Result<EpisodeMap, EpisodeError>
    where
        I: IntoIterator<Item = TimelineItem>,
    {
        let mut state = SegmenterState::default();
        for item in items {
            state.push(&item, &self.policy)?;
        }
        Ok(state.finish(&self.policy))
    }

    /// Segment with keys processed in parallel. Produces the same map as
    /// [`StreamSegmenter::segment`].
    pub fn segment_par(&self, items: Vec<TimelineItem>) -> Result<EpisodeMap, EpisodeError> {
        let total = items.len();
        let mut by_key: BTreeMap<PairKey, Vec<TimelineItem>> = BTreeMap::new();
        for item in items {
            by_key.entry(item.key).or_default().push(item);
        }

        let policy = self.policy;
        let segmented: Vec<(PairKey, Vec<Episode>)> = by_key
            .into_par_iter()
            .map(|(key, items)| {
                let mut timeline = KeyTimeline::default();
                for item in &items {
                    timeline.push(item, &policy)?;
                }
                Ok((key, timeline.finish(&policy)))
            })
            .collect::<Result<_, EpisodeError>>()?;

        let map: EpisodeMap = segmented
            .into_iter()
            .filter(|(_, episodes)| !episodes.is_empty())
            .collect();
        events::segmentation_completed(total, map.len(), map.values().map(Vec::len).sum());
        Ok(map)
    }
}

impl Default for StreamSegmenter {
    fn default() -> Self {
        Self::new(&SegmenterConfig::default())
    }
}
