use serde::{Deserialize, Serialize};

/// Which episodes of a pair become interaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeSelection {
    /// Only the first retained non-gap episode per pair.
    #[default]
    First,
    /// Every retained non-gap episode.
    All,
}

/// Episode extraction configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub selection: EpisodeSelection,
}
