use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::errors::VelocityError;
use crate::models::{EntityId, VelocitySample};

/// Provider of per-entity speed time series.
pub trait VelocityProvider {
    /// Samples for `entity` within `[from, to]`. `Ok(None)` means the entity
    /// has no series at all.
    fn velocities(
        &self,
        entity: EntityId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Option<Vec<VelocitySample>>, VelocityError>;
}

/// In-memory provider, mostly for tests and cached series.
impl VelocityProvider for HashMap<EntityId, Vec<VelocitySample>> {
    fn velocities(
        &self,
        entity: EntityId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Option<Vec<VelocitySample>>, VelocityError> {
        Ok(self.get(&entity).map(|series| {
            series
                .iter()
                .filter(|s| s.timestamp >= from && s.timestamp <= to)
                .copied()
                .collect()
        }))
    }
}
