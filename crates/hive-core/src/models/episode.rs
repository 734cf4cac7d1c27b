use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{PairKey, Pose, TimelineItem};
use crate::constants::GAP_CATEGORY;

/// A contiguous run of same-category detections for one entity pair.
///
/// Invariant: `start <= end`. A single-instant episode carries identical
/// start and end poses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub key: PairKey,
    pub category: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub pose_a_start: Pose,
    pub pose_b_start: Pose,
    pub pose_a_end: Pose,
    pub pose_b_end: Pose,
}

impl Episode {
    /// Single-instant episode `[t, t]` opened by `item`.
    pub fn instant(item: &TimelineItem) -> Self {
        Self {
            key: item.key,
            category: item.category.clone(),
            start: item.timestamp,
            end: item.timestamp,
            pose_a_start: item.pose_a,
            pose_b_start: item.pose_b,
            pose_a_end: item.pose_a,
            pose_b_end: item.pose_b,
        }
    }

    /// Synthetic gap episode from the end of `before` up to `item`.
    pub fn gap(before: &Episode, item: &TimelineItem) -> Self {
        Self {
            key: item.key,
            category: GAP_CATEGORY.to_string(),
            start: before.end,
            end: item.timestamp,
            pose_a_start: before.pose_a_end,
            pose_b_start: before.pose_b_end,
            pose_a_end: item.pose_a,
            pose_b_end: item.pose_b,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn is_gap(&self) -> bool {
        self.category == GAP_CATEGORY
    }

    /// Whether this episode is shorter than `min`. `None` means no minimum.
    pub fn is_shorter_than(&self, min: Option<Duration>) -> bool {
        min.is_some_and(|min| self.duration() < min)
    }
}
