//! Influence-tree construction errors.

/// Errors raised while building or flattening influence trees.
#[derive(Debug, thiserror::Error)]
pub enum InfluenceError {
    #[error("malformed interaction record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    #[error("no interactions found")]
    NoInteractions,

    #[error("no seeds supplied")]
    NoSeeds,
}

impl InfluenceError {
    /// Whether this error reports an empty result rather than a failure.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::NoInteractions | Self::NoSeeds)
    }
}
