//! Error handling for hive.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod episode_error;
pub mod hive_error;
pub mod influence_error;
pub mod velocity_error;

pub use config_error::ConfigError;
pub use episode_error::EpisodeError;
pub use hive_error::{HiveError, HiveResult};
pub use influence_error::InfluenceError;
pub use velocity_error::VelocityError;
