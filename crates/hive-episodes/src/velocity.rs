//! Speed change of each participant across an interaction.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use hive_core::errors::VelocityError;
use hive_core::models::{
    EnrichedInteraction, EntityId, InteractionRecord, VelocityChange, VelocitySample,
};
use hive_core::time::{saturating_add, saturating_sub};
use hive_core::traits::VelocityProvider;

/// Mean speed in `[start - window, start)` versus `(end, end + window]`.
pub fn velocity_change(
    samples: &[VelocitySample],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    window: Duration,
) -> VelocityChange {
    let (from, to) = (saturating_sub(start, window), saturating_add(end, window));
    let before = mean(
        samples
            .iter()
            .filter(|s| s.timestamp >= from && s.timestamp < start),
    );
    let after = mean(
        samples
            .iter()
            .filter(|s| s.timestamp > end && s.timestamp <= to),
    );

    let absolute = match (before, after) {
        (Some(before), Some(after)) => Some(after - before),
        _ => None,
    };
    let relative_percent = match (absolute, before) {
        (Some(change), Some(before)) if before != 0.0 && before.is_finite() => {
            Some(change / before * 100.0)
        }
        _ => None,
    };
    VelocityChange {
        absolute,
        relative_percent,
    }
}

fn mean<'a>(samples: impl Iterator<Item = &'a VelocitySample>) -> Option<f64> {
    let (sum, count) = samples
        .filter(|s| s.velocity.is_finite())
        .fold((0.0, 0usize), |(sum, count), s| (sum + s.velocity, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Attaches velocity changes of both participants to extracted records.
pub struct VelocityEnricher<'p, P: VelocityProvider + ?Sized> {
    provider: &'p P,
    window: Duration,
}

impl<'p, P: VelocityProvider + ?Sized> VelocityEnricher<'p, P> {
    pub fn new(provider: &'p P, window: Duration) -> Self {
        Self { provider, window }
    }

    pub fn enrich(&self, record: InteractionRecord) -> Result<EnrichedInteraction, VelocityError> {
        let bee0 = self.change_for(record.bee_id0, &record)?;
        let bee1 = self.change_for(record.bee_id1, &record)?;
        Ok(EnrichedInteraction {
            record,
            vel_change_bee0: bee0.absolute,
            rel_change_bee0: bee0.relative_percent,
            vel_change_bee1: bee1.absolute,
            rel_change_bee1: bee1.relative_percent,
        })
    }

    pub fn enrich_all(
        &self,
        records: Vec<InteractionRecord>,
    ) -> Result<Vec<EnrichedInteraction>, VelocityError> {
        records.into_iter().map(|r| self.enrich(r)).collect()
    }

    fn change_for(
        &self,
        entity: EntityId,
        record: &InteractionRecord,
    ) -> Result<VelocityChange, VelocityError> {
        self.change_over(entity, record.interaction_start, record.interaction_end)
    }

    /// Speed change of `entity` across `[start, end]`.
    pub fn change_over(
        &self,
        entity: EntityId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<VelocityChange, VelocityError> {
        let from = saturating_sub(start, self.window);
        let to = saturating_add(end, self.window);
        match self.provider.velocities(entity, from, to)? {
            Some(samples) => Ok(velocity_change(&samples, start, end, self.window)),
            None => {
                debug!(entity, "no velocity series, leaving change undefined");
                Ok(VelocityChange::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_690_000_000 + secs, 0).unwrap()
    }

    fn sample(secs: i64, velocity: f64) -> VelocitySample {
        VelocitySample {
            timestamp: at(secs),
            velocity,
        }
    }

    #[test]
    fn change_is_after_minus_before() {
        let samples = vec![
            sample(-40, 100.0), // outside window
            sample(-20, 2.0),
            sample(-10, 4.0),
            sample(0, 50.0), // at start, excluded
            sample(5, 50.0), // during interaction
            sample(10, 50.0), // at end, excluded
            sample(20, 9.0),
            sample(40, 1000.0), // at end + window, included
        ];
        let change = velocity_change(&samples, at(0), at(10), Duration::seconds(30));
        let after = (9.0 + 1000.0) / 2.0;
        assert_eq!(change.absolute, Some(after - 3.0));
        assert_eq!(change.relative_percent, Some((after - 3.0) / 3.0 * 100.0));
    }

    #[test]
    fn missing_side_leaves_change_undefined() {
        let samples = vec![sample(-5, 2.0)];
        let change = velocity_change(&samples, at(0), at(1), Duration::seconds(30));
        assert_eq!(change, VelocityChange::default());
    }

    #[test]
    fn zero_baseline_has_no_relative_change() {
        let samples = vec![sample(-5, 0.0), sample(5, 3.0)];
        let change = velocity_change(&samples, at(0), at(1), Duration::seconds(30));
        assert_eq!(change.absolute, Some(3.0));
        assert_eq!(change.relative_percent, None);
    }

    #[test]
    fn huge_window_averages_everything_without_overflow() {
        let samples = vec![sample(-20, 2.0), sample(20, 4.0)];
        let window = Duration::milliseconds(9_000_000_000_000_000);
        let change = velocity_change(&samples, at(0), at(10), window);
        assert_eq!(change.absolute, Some(2.0));
    }
}
