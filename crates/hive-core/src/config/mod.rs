//! Configuration system for hive.
//! TOML-based, layered: env > file > compiled defaults.

pub mod defaults;
pub mod extraction_config;
pub mod hive_config;
pub mod influence_config;
pub mod observability_config;
pub mod segmenter_config;
pub mod velocity_config;

pub use extraction_config::{EpisodeSelection, ExtractionConfig};
pub use hive_config::HiveConfig;
pub use influence_config::InfluenceConfig;
pub use observability_config::ObservabilityConfig;
pub use segmenter_config::{FieldNames, SegmenterConfig};
pub use velocity_config::VelocityConfig;
