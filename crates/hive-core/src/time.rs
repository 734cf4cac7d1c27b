//! Instant arithmetic that clamps at the ends of the representable range.

use chrono::{DateTime, Duration, Utc};

/// `t - d`, clamped to `[MIN_UTC, MAX_UTC]`.
pub fn saturating_sub(t: DateTime<Utc>, d: Duration) -> DateTime<Utc> {
    t.checked_sub_signed(d).unwrap_or_else(|| {
        if d > Duration::zero() {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        }
    })
}

/// `t + d`, clamped to `[MIN_UTC, MAX_UTC]`.
pub fn saturating_add(t: DateTime<Utc>, d: Duration) -> DateTime<Utc> {
    t.checked_add_signed(d).unwrap_or_else(|| {
        if d > Duration::zero() {
            DateTime::<Utc>::MAX_UTC
        } else {
            DateTime::<Utc>::MIN_UTC
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn clamps_instead_of_overflowing() {
        let t = Utc.timestamp_opt(1_690_000_000, 0).unwrap();
        let huge = Duration::milliseconds(9_000_000_000_000_000);
        assert_eq!(saturating_sub(t, huge), DateTime::<Utc>::MIN_UTC);
        assert_eq!(saturating_add(t, huge), DateTime::<Utc>::MAX_UTC);
        assert_eq!(saturating_sub(t, -huge), DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn in_range_arithmetic_is_exact() {
        let t = Utc.timestamp_opt(1_690_000_000, 0).unwrap();
        assert_eq!(saturating_sub(t, Duration::seconds(10)), t - Duration::seconds(10));
        assert_eq!(saturating_add(t, Duration::seconds(10)), t + Duration::seconds(10));
    }
}
