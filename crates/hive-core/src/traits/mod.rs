//! Boundaries to external collaborators: detection retrieval and velocity series.

pub mod detection_source;
pub mod velocity_provider;

pub use detection_source::DetectionSource;
pub use velocity_provider::VelocityProvider;
