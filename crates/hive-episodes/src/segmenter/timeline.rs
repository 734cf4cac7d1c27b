//! Owned episode list for a single pair key.

use hive_core::errors::EpisodeError;
use hive_core::models::{Episode, TimelineItem};

use super::gap_policy::{apply, GapPolicy, Step};

/// Episodes recorded so far for one key. The last one is the open episode.
#[derive(Debug, Clone, Default)]
pub struct KeyTimeline {
    episodes: Vec<Episode>,
}

impl KeyTimeline {
    /// Feed the next item of this key. Items must arrive in time order.
    pub fn push(&mut self, item: &TimelineItem, policy: &GapPolicy) -> Result<(), EpisodeError> {
        if let Some(last) = self.episodes.last() {
            if item.timestamp < last.end {
                return Err(EpisodeError::OutOfOrder {
                    key: item.key.to_string(),
                    at: item.timestamp.to_rfc3339(),
                    open_end: last.end.to_rfc3339(),
                });
            }
        }

        match policy.step(self.episodes.last(), item) {
            Step::Open => {
                let open = policy.open(&self.episodes, item);
                apply(&mut self.episodes, open);
            }
            Step::SplitAtGap => {
                if let Some(gap) = policy.fill_gap(&self.episodes, item) {
                    apply(&mut self.episodes, gap);
                }
                let open = policy.open(&self.episodes, item);
                apply(&mut self.episodes, open);
            }
            Step::Extend => apply(&mut self.episodes, GapPolicy::extend(item)),
        }
        Ok(())
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Close the stream: drop a too-short final episode, then sweep any
    /// remaining episode below the minimum duration.
    pub fn finish(mut self, policy: &GapPolicy) -> Vec<Episode> {
        if self
            .episodes
            .last()
            .is_some_and(|last| !policy.retains(last))
        {
            self.episodes.pop();
        }
        self.episodes.retain(|episode| policy.retains(episode));
        self.episodes
    }
}
