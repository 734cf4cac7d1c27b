//! InfluenceEngine: indexes the focal table, builds the forest, flattens it.

use hive_core::config::InfluenceConfig;
use hive_core::errors::InfluenceError;
use hive_core::models::FocalInteraction;
use hive_core::HiveConfig;

use crate::discovery::InteractionIndex;
use crate::flatten::{flatten_forest, PathRecord};
use crate::forest::Forest;
use crate::tree::{BuildOutcome, Seed, TreeBuilder};

/// The main influence-tracing engine.
#[derive(Debug, Clone, Default)]
pub struct InfluenceEngine {
    builder: TreeBuilder,
}

impl InfluenceEngine {
    pub fn new(config: InfluenceConfig) -> Self {
        Self {
            builder: TreeBuilder::new(config),
        }
    }

    pub fn from_config(config: &HiveConfig) -> Self {
        Self::new(config.influence.clone())
    }

    pub fn config(&self) -> &InfluenceConfig {
        self.builder.config()
    }

    pub fn build_tree(&self, index: &InteractionIndex, seed: &Seed) -> BuildOutcome {
        self.builder.build(index, seed)
    }

    pub fn build_forest(
        &self,
        index: &InteractionIndex,
        seeds: &[Seed],
    ) -> Result<Forest, InfluenceError> {
        Forest::build(&self.builder, index, seeds)
    }

    /// Seeds from every row selected by `select`, focal side at interaction start.
    pub fn seeds_where<F>(rows: &[FocalInteraction], select: F) -> Vec<Seed>
    where
        F: Fn(&FocalInteraction) -> bool,
    {
        rows.iter()
            .filter(|row| select(*row))
            .map(Seed::from_interaction)
            .collect()
    }

    /// Index `rows`, build one tree per seed, and flatten the forest.
    pub fn trace(
        &self,
        rows: Vec<FocalInteraction>,
        seeds: &[Seed],
    ) -> Result<Vec<PathRecord>, InfluenceError> {
        if seeds.is_empty() {
            return Err(InfluenceError::NoSeeds);
        }
        let index = InteractionIndex::new(rows)?;
        let forest = self.build_forest(&index, seeds)?;
        Ok(flatten_forest(&forest))
    }
}
