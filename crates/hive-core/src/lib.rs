//! # hive-core
//!
//! Foundation crate for hive interaction analysis.
//! Defines the shared models, collaborator traits, errors, config, tracing
//! setup, constants, and saturating instant arithmetic. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod time;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::HiveConfig;
pub use errors::{HiveError, HiveResult};
pub use models::{
    EnrichedInteraction, EntityId, Episode, FocalInteraction, InteractionRecord, PairKey, Pose,
    RawDetection, TimelineItem,
};
