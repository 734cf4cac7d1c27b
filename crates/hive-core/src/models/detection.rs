use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, PairKey, Pose};

/// One proximity detection between two entities in a single frame,
/// as delivered by the detection source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    pub bee_id0: EntityId,
    pub bee_id1: EntityId,
    pub timestamp: DateTime<Utc>,
    pub location_info_bee0: Pose,
    pub location_info_bee1: Pose,
}

/// Canonical per-pair timeline item consumed by the segmenter.
///
/// `pose_a` always belongs to `key.first()`, `pose_b` to `key.second()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub key: PairKey,
    pub timestamp: DateTime<Utc>,
    pub category: String,
    pub pose_a: Pose,
    pub pose_b: Pose,
}
