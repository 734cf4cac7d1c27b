//! # hive-episodes
//!
//! Turns per-frame proximity detections into interaction episodes.
//! Normalization, run-length segmentation with gap policy, extraction of flat
//! interaction records, velocity enrichment, the focal/non-focal pivot, and
//! profiled non-interaction windows.

pub mod extractor;
pub mod focal;
pub mod normalizer;
pub mod pipeline;
pub mod segmenter;
pub mod velocity;
pub mod windows;

pub use extractor::EpisodeExtractor;
pub use normalizer::DetectionNormalizer;
pub use pipeline::InteractionPipeline;
pub use segmenter::{EpisodeMap, StreamSegmenter};
pub use velocity::VelocityEnricher;
pub use windows::{NonInteractionWindow, WindowProfile};
