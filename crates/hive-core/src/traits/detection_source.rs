use chrono::{DateTime, Utc};

use crate::errors::EpisodeError;
use crate::models::RawDetection;

/// Source of per-frame proximity detections, e.g. a tracking database.
pub trait DetectionSource {
    /// All detections for `cam_id` with frame timestamps in `[from, to)`,
    /// ordered by timestamp.
    fn detections(
        &self,
        cam_id: u32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<RawDetection>, EpisodeError>;
}

impl DetectionSource for Vec<RawDetection> {
    fn detections(
        &self,
        _cam_id: u32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<RawDetection>, EpisodeError> {
        Ok(self
            .iter()
            .filter(|d| d.timestamp >= from && d.timestamp < to)
            .cloned()
            .collect())
    }
}
