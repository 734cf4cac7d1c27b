//! Top-level error aggregating all subsystem errors via `From` conversions.

use super::{ConfigError, EpisodeError, InfluenceError, VelocityError};

/// Any error produced by the hive pipeline.
#[derive(Debug, thiserror::Error)]
pub enum HiveError {
    #[error("episode error: {0}")]
    Episode(#[from] EpisodeError),

    #[error("influence error: {0}")]
    Influence(#[from] InfluenceError),

    #[error("velocity error: {0}")]
    Velocity(#[from] VelocityError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl HiveError {
    /// Whether the pipeline found no data, as opposed to failing.
    /// Batch jobs skip these instead of aborting.
    pub fn is_empty_result(&self) -> bool {
        match self {
            Self::Episode(e) => e.is_empty_result(),
            Self::Influence(e) => e.is_empty_result(),
            Self::Velocity(_) | Self::Config(_) => false,
        }
    }
}

pub type HiveResult<T> = Result<T, HiveError>;
