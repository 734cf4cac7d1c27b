//! Detection normalization, segmentation, and extraction errors.

/// Errors raised while turning detections into episodes and interaction records.
#[derive(Debug, thiserror::Error)]
pub enum EpisodeError {
    #[error("malformed detection: missing or invalid field `{field}`")]
    MalformedDetection { field: String },

    #[error("invalid pair key `{key}`: expected `idA_idB`")]
    InvalidPairKey { key: String },

    #[error("detection for {key} at {at} is earlier than the open episode ending at {open_end}")]
    OutOfOrder {
        key: String,
        at: String,
        open_end: String,
    },

    #[error("no detections found")]
    NoDetections,

    #[error("no events found")]
    NoEvents,
}

impl EpisodeError {
    /// Whether this error reports an empty result rather than a failure.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::NoDetections | Self::NoEvents)
    }
}
