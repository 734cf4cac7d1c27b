//! Velocity enrichment errors.

use crate::models::EntityId;

/// Errors raised by velocity providers.
#[derive(Debug, thiserror::Error)]
pub enum VelocityError {
    #[error("velocity provider failed for entity {entity}: {reason}")]
    ProviderFailed { entity: EntityId, reason: String },
}
