//! Shared data model: poses, pair keys, detections, episodes, and interaction rows.

pub mod detection;
pub mod episode;
pub mod interaction;
pub mod pair_key;
pub mod pose;
pub mod velocity;

pub use detection::{RawDetection, TimelineItem};
pub use episode::Episode;
pub use interaction::{EnrichedInteraction, EntityProfile, FocalInteraction, InteractionRecord};
pub use pair_key::PairKey;
pub use pose::Pose;
pub use velocity::{VelocityChange, VelocitySample};

/// Identifier of a tracked individual.
pub type EntityId = u64;
