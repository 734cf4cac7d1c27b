//! Transition decisions for a single key's episode list.
//!
//! Every incoming item is classified into a [`Step`]; each step resolves to one
//! or two [`Transition`]s that are applied to the owned episode list.

use chrono::{DateTime, Duration, Utc};

use hive_core::config::SegmenterConfig;
use hive_core::models::{Episode, Pose, TimelineItem};

/// How an item relates to the open episode of its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// No episode yet, or the category changed: open a new episode.
    Open,
    /// Same category but the delay exceeds the gap tolerance.
    SplitAtGap,
    /// Same category within tolerance: grow the open episode.
    Extend,
}

/// A single edit of an episode list.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Append(Episode),
    /// Overwrite the last episode.
    Replace(Episode),
    Extend {
        end: DateTime<Utc>,
        pose_a: Pose,
        pose_b: Pose,
    },
}

/// Gap tolerance, minimum duration, and gap filling for one segmentation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapPolicy {
    pub min_gap: Option<Duration>,
    pub min_event_duration: Option<Duration>,
    pub fill_gaps: bool,
}

impl GapPolicy {
    pub fn from_config(config: &SegmenterConfig) -> Self {
        Self {
            min_gap: config.min_gap(),
            min_event_duration: config.min_event_duration(),
            fill_gaps: config.fill_gaps,
        }
    }

    pub fn step(&self, last: Option<&Episode>, item: &TimelineItem) -> Step {
        match last {
            None => Step::Open,
            Some(last) if last.category != item.category => Step::Open,
            Some(last) => {
                let delay = item.timestamp - last.end;
                if self.min_gap.is_some_and(|gap| delay > gap) {
                    Step::SplitAtGap
                } else {
                    Step::Extend
                }
            }
        }
    }

    /// Open a single-instant episode at `item`. A too-short last episode is
    /// overwritten instead of kept.
    pub fn open(&self, history: &[Episode], item: &TimelineItem) -> Transition {
        let episode = Episode::instant(item);
        match history.last() {
            Some(last) if last.is_shorter_than(self.min_event_duration) => {
                Transition::Replace(episode)
            }
            _ => Transition::Append(episode),
        }
    }

    /// The gap episode to insert before `item`, if gaps are filled.
    ///
    /// A too-short last episode is collapsed into the gap, which then starts
    /// at the end of the episode before it.
    pub fn fill_gap(&self, history: &[Episode], item: &TimelineItem) -> Option<Transition> {
        if !self.fill_gaps {
            return None;
        }
        let last = history.last()?;
        if last.is_shorter_than(self.min_event_duration) && history.len() >= 2 {
            let anchor = &history[history.len() - 2];
            Some(Transition::Replace(Episode::gap(anchor, item)))
        } else {
            Some(Transition::Append(Episode::gap(last, item)))
        }
    }

    pub fn extend(item: &TimelineItem) -> Transition {
        Transition::Extend {
            end: item.timestamp,
            pose_a: item.pose_a,
            pose_b: item.pose_b,
        }
    }

    /// Whether a finished episode survives the minimum-duration filter.
    pub fn retains(&self, episode: &Episode) -> bool {
        !episode.is_shorter_than(self.min_event_duration)
    }
}

/// Apply `transition` to `history`.
pub fn apply(history: &mut Vec<Episode>, transition: Transition) {
    match transition {
        Transition::Append(episode) => history.push(episode),
        Transition::Replace(episode) => match history.last_mut() {
            Some(last) => *last = episode,
            None => history.push(episode),
        },
        Transition::Extend { end, pose_a, pose_b } => {
            if let Some(last) = history.last_mut() {
                last.end = end;
                last.pose_a_end = pose_a;
                last.pose_b_end = pose_b;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use hive_core::models::PairKey;

    fn item(ms: i64, category: &str) -> TimelineItem {
        TimelineItem {
            key: PairKey::new(1, 2),
            timestamp: Utc.timestamp_millis_opt(1_690_000_000_000 + ms).unwrap(),
            category: category.to_string(),
            pose_a: Pose::new(ms as f64, 0.0, 0.0),
            pose_b: Pose::default(),
        }
    }

    fn policy(min_gap_ms: i64, min_duration_ms: Option<i64>, fill_gaps: bool) -> GapPolicy {
        GapPolicy {
            min_gap: Some(Duration::milliseconds(min_gap_ms)),
            min_event_duration: min_duration_ms.map(Duration::milliseconds),
            fill_gaps,
        }
    }

    #[test]
    fn classifies_steps() {
        let p = policy(2_000, None, false);
        let open = Episode::instant(&item(0, "a"));
        assert_eq!(p.step(None, &item(0, "a")), Step::Open);
        assert_eq!(p.step(Some(&open), &item(100, "b")), Step::Open);
        assert_eq!(p.step(Some(&open), &item(2_000, "a")), Step::Extend);
        assert_eq!(p.step(Some(&open), &item(2_001, "a")), Step::SplitAtGap);
    }

    #[test]
    fn disabled_gap_always_extends() {
        let p = GapPolicy {
            min_gap: None,
            min_event_duration: None,
            fill_gaps: true,
        };
        let open = Episode::instant(&item(0, "a"));
        assert_eq!(p.step(Some(&open), &item(3_600_000, "a")), Step::Extend);
    }

    #[test]
    fn open_replaces_short_last_episode() {
        let p = policy(2_000, Some(1_000), false);
        let history = vec![Episode::instant(&item(0, "a"))];
        assert!(matches!(p.open(&history, &item(500, "b")), Transition::Replace(_)));

        let mut long = Episode::instant(&item(0, "a"));
        long.end = item(1_000, "a").timestamp;
        assert!(matches!(p.open(&[long], &item(1_500, "b")), Transition::Append(_)));
    }

    #[test]
    fn gap_collapses_short_episode_into_previous() {
        let p = policy(2_000, Some(1_000), true);
        let mut first = Episode::instant(&item(0, "a"));
        first.end = item(1_500, "a").timestamp;
        let short = Episode::instant(&item(2_000, "b"));
        let history = vec![first.clone(), short];

        match p.fill_gap(&history, &item(5_000, "b")) {
            Some(Transition::Replace(gap)) => {
                assert!(gap.is_gap());
                assert_eq!(gap.start, first.end);
                assert_eq!(gap.end, item(5_000, "b").timestamp);
            }
            other => panic!("expected collapsing gap, got {other:?}"),
        }
    }

    #[test]
    fn gap_is_appended_when_nothing_to_collapse() {
        let p = policy(2_000, Some(1_000), true);
        let history = vec![Episode::instant(&item(0, "a"))];
        assert!(matches!(
            p.fill_gap(&history, &item(3_000, "a")),
            Some(Transition::Append(_))
        ));
        assert_eq!(policy(2_000, None, false).fill_gap(&history, &item(3_000, "a")), None);
    }

    #[test]
    fn extend_moves_end_and_end_poses() {
        let mut history = vec![Episode::instant(&item(0, "a"))];
        apply(&mut history, GapPolicy::extend(&item(700, "a")));
        assert_eq!(history[0].end, item(700, "a").timestamp);
        assert_eq!(history[0].pose_a_end.x, 700.0);
        assert_eq!(history[0].pose_a_start.x, 0.0);
    }
}
