//! Detections → interaction records in one call.

use chrono::{DateTime, Utc};

use hive_core::config::{ExtractionConfig, SegmenterConfig};
use hive_core::errors::EpisodeError;
use hive_core::models::{InteractionRecord, RawDetection};
use hive_core::traits::DetectionSource;
use hive_core::tracing_setup::events;
use hive_core::HiveConfig;

use crate::extractor::EpisodeExtractor;
use crate::normalizer::DetectionNormalizer;
use crate::segmenter::StreamSegmenter;

/// Normalize, segment, and extract.
#[derive(Debug, Clone)]
pub struct InteractionPipeline {
    normalizer: DetectionNormalizer,
    segmenter: StreamSegmenter,
    extractor: EpisodeExtractor,
}

impl InteractionPipeline {
    pub fn new(segmenter: &SegmenterConfig, extraction: &ExtractionConfig) -> Self {
        Self {
            normalizer: DetectionNormalizer::new(segmenter.fields.clone()),
            segmenter: StreamSegmenter::new(segmenter),
            extractor: EpisodeExtractor::new(extraction),
        }
    }

    pub fn from_config(config: &HiveConfig) -> Self {
        Self::new(&config.segmenter, &config.extraction)
    }

    /// Interaction records for a batch of detections.
    ///
    /// Fails with [`EpisodeError::NoDetections`] on empty input and with
    /// [`EpisodeError::NoEvents`] when no episode survives segmentation.
    pub fn extract_interactions(
        &self,
        detections: &[RawDetection],
    ) -> Result<Vec<InteractionRecord>, EpisodeError> {
        if detections.is_empty() {
            return Err(EpisodeError::NoDetections);
        }
        let mut items = self.normalizer.normalize_all(detections);
        // Stable: detections sharing a timestamp keep their input order.
        items.sort_by_key(|item| item.timestamp);

        let episodes = self.segmenter.segment(items)?;
        if episodes.is_empty() {
            return Err(EpisodeError::NoEvents);
        }
        let records = self.extractor.extract(&episodes);
        events::interactions_extracted(records.len());
        Ok(records)
    }

    /// Fetch detections for `cam_id` in `[from, to)` and extract interactions.
    pub fn from_source<S>(
        &self,
        source: &S,
        cam_id: u32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<InteractionRecord>, EpisodeError>
    where
        S: DetectionSource + ?Sized,
    {
        let detections = source.detections(cam_id, from, to)?;
        self.extract_interactions(&detections)
    }
}

impl Default for InteractionPipeline {
    fn default() -> Self {
        Self::new(&SegmenterConfig::interactions(), &ExtractionConfig::default())
    }
}
