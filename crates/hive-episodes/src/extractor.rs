//! Episodes → flat interaction records.

use hive_core::config::{EpisodeSelection, ExtractionConfig};
use hive_core::models::{Episode, InteractionRecord};

use crate::segmenter::EpisodeMap;

/// Turns retained episodes into interaction records.
#[derive(Debug, Clone, Default)]
pub struct EpisodeExtractor {
    selection: EpisodeSelection,
}

impl EpisodeExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            selection: config.selection,
        }
    }

    /// One record per selected non-gap episode, in key order.
    pub fn extract(&self, episodes: &EpisodeMap) -> Vec<InteractionRecord> {
        episodes
            .values()
            .flat_map(|list| {
                let candidates = list.iter().filter(|e| !e.is_gap());
                match self.selection {
                    EpisodeSelection::First => candidates.take(1).collect::<Vec<_>>(),
                    EpisodeSelection::All => candidates.collect(),
                }
            })
            .map(to_record)
            .collect()
    }
}

/// Flatten one episode. The pair key's first entity becomes `bee_id0`.
pub fn to_record(episode: &Episode) -> InteractionRecord {
    InteractionRecord {
        bee_id0: episode.key.first(),
        bee_id1: episode.key.second(),
        interaction_start: episode.start,
        interaction_end: episode.end,
        pose_start_bee0: episode.pose_a_start,
        pose_start_bee1: episode.pose_b_start,
        pose_end_bee0: episode.pose_a_end,
        pose_end_bee1: episode.pose_b_end,
    }
}
