//! Per-entity time windows without any interaction.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hive_core::errors::VelocityError;
use hive_core::models::{EntityId, FocalInteraction};
use hive_core::traits::VelocityProvider;

use crate::velocity::VelocityEnricher;

/// A stretch of `[start, end]` during which `bee_id` was not interacting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonInteractionWindow {
    pub bee_id: EntityId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Gaps between the merged interaction intervals of every focal entity,
/// clipped to `[from, to]`. Ordered by entity, then time. Zero-length gaps
/// are omitted.
pub fn non_interaction_windows(
    rows: &[FocalInteraction],
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Vec<NonInteractionWindow> {
    let mut busy: BTreeMap<EntityId, Vec<(DateTime<Utc>, DateTime<Utc>)>> = BTreeMap::new();
    for row in rows {
        let start = row.interaction_start.max(from);
        let end = row.interaction_end.min(to);
        let intervals = busy.entry(row.bee_id_focal).or_default();
        if start <= end {
            intervals.push((start, end));
        }
    }

    let mut windows = Vec::new();
    for (bee_id, mut intervals) in busy {
        intervals.sort();
        let mut cursor = from;
        for (start, end) in intervals {
            if start > cursor {
                windows.push(NonInteractionWindow {
                    bee_id,
                    start: cursor,
                    end: start,
                });
            }
            cursor = cursor.max(end);
        }
        if to > cursor {
            windows.push(NonInteractionWindow {
                bee_id,
                start: cursor,
                end: to,
            });
        }
    }
    windows
}

/// A non-interaction window with the entity's speed change across it and
/// its focal metadata for that day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowProfile {
    #[serde(flatten)]
    pub window: NonInteractionWindow,
    pub vel_change_bee: Option<f64>,
    pub rel_change_bee: Option<f64>,
    pub phase: Option<f64>,
    pub age: Option<f64>,
    pub r_squared: Option<f64>,
}

/// Attach speed change and focal metadata to each window.
///
/// Metadata comes from the entity's earliest focal row starting on the
/// window's start date (UTC); without one it stays undefined.
pub fn profile_windows<P: VelocityProvider + ?Sized>(
    windows: &[NonInteractionWindow],
    rows: &[FocalInteraction],
    velocities: &VelocityEnricher<'_, P>,
) -> Result<Vec<WindowProfile>, VelocityError> {
    windows
        .iter()
        .map(|window| {
            let change = velocities.change_over(window.bee_id, window.start, window.end)?;
            let day = window.start.date_naive();
            let meta = rows
                .iter()
                .filter(|r| r.bee_id_focal == window.bee_id)
                .filter(|r| r.interaction_start.date_naive() == day)
                .min_by_key(|r| r.interaction_start);
            Ok(WindowProfile {
                window: *window,
                vel_change_bee: change.absolute,
                rel_change_bee: change.relative_percent,
                phase: meta.and_then(|r| r.phase_focal),
                age: meta.and_then(|r| r.age_focal),
                r_squared: meta.and_then(|r| r.r_squared_focal),
            })
        })
        .collect()
}

/// [`non_interaction_windows`] followed by [`profile_windows`].
pub fn non_interaction_profiles<P: VelocityProvider + ?Sized>(
    rows: &[FocalInteraction],
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    velocities: &VelocityEnricher<'_, P>,
) -> Result<Vec<WindowProfile>, VelocityError> {
    profile_windows(&non_interaction_windows(rows, from, to), rows, velocities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_690_000_000 + secs, 0).unwrap()
    }

    fn row(focal: EntityId, start: i64, end: i64) -> FocalInteraction {
        FocalInteraction {
            bee_id_focal: focal,
            bee_id_non_focal: 99,
            interaction_start: at(start),
            interaction_end: at(end),
            phase_focal: None,
            phase_non_focal: None,
            age_focal: None,
            age_non_focal: None,
            r_squared_focal: None,
            r_squared_non_focal: None,
            x_pos_start_focal: 0.0,
            y_pos_start_focal: 0.0,
            x_pos_start_non_focal: 0.0,
            y_pos_start_non_focal: 0.0,
            theta_start_focal: None,
            theta_start_non_focal: None,
            vel_change_bee_focal: None,
            vel_change_bee_non_focal: None,
            rel_change_bee_focal: None,
            rel_change_bee_non_focal: None,
        }
    }

    #[test]
    fn overlapping_interactions_merge() {
        let rows = vec![row(1, 10, 20), row(1, 15, 30), row(1, 50, 60)];
        let windows = non_interaction_windows(&rows, at(0), at(100));
        let spans: Vec<_> = windows
            .iter()
            .map(|w| ((w.start - at(0)).num_seconds(), (w.end - at(0)).num_seconds()))
            .collect();
        assert_eq!(spans, vec![(0, 10), (30, 50), (60, 100)]);
    }

    #[test]
    fn interactions_are_clipped_to_range() {
        let rows = vec![row(2, -10, 5), row(3, 95, 120)];
        let windows = non_interaction_windows(&rows, at(0), at(100));
        assert_eq!(windows.len(), 2);
        assert_eq!((windows[0].bee_id, windows[0].start), (2, at(5)));
        assert_eq!(windows[0].end - windows[0].start, Duration::seconds(95));
        assert_eq!((windows[1].bee_id, windows[1].end), (3, at(95)));
    }

    #[test]
    fn entity_outside_range_is_idle_throughout() {
        let rows = vec![row(4, 200, 210)];
        let windows = non_interaction_windows(&rows, at(0), at(100));
        assert_eq!(
            windows,
            vec![NonInteractionWindow {
                bee_id: 4,
                start: at(0),
                end: at(100),
            }]
        );
    }
}
