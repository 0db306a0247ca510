//! Time utilities

use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Local, Utc};

use crate::constants::{MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};

/// Source of wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Day/hour/minute/second breakdown of a non-negative delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct DurationParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for DurationParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Break a millisecond delta into days, hours, minutes and seconds.
///
/// Sub-second remainders are floored away.
pub fn duration_parts(delta_millis: u64) -> DurationParts {
    DurationParts {
        days: delta_millis / MILLIS_PER_DAY,
        hours: (delta_millis % MILLIS_PER_DAY) / MILLIS_PER_HOUR,
        minutes: (delta_millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
        seconds: (delta_millis % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND,
    }
}

/// Milliseconds from `now` until `target`, zero if `target` has passed
pub fn millis_until(now: DateTime<Utc>, target: DateTime<Utc>) -> u64 {
    u64::try_from((target - now).num_milliseconds()).unwrap_or(0)
}

/// Format a timestamp in the local timezone for display
pub fn format_local(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Parse a datetime string in ISO 8601 format
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_parts() {
        assert_eq!(duration_parts(0), DurationParts::default());
        assert_eq!(
            duration_parts(3_600_000),
            DurationParts { days: 0, hours: 1, minutes: 0, seconds: 0 }
        );
        assert_eq!(
            duration_parts(90_061_999),
            DurationParts { days: 1, hours: 1, minutes: 1, seconds: 1 }
        );
        assert_eq!(
            duration_parts(999),
            DurationParts { days: 0, hours: 0, minutes: 0, seconds: 0 }
        );
    }

    #[test]
    fn test_display_matches_countdown_format() {
        assert_eq!(duration_parts(3_600_000).to_string(), "0d 1h 0m 0s");
        assert_eq!(duration_parts(2 * MILLIS_PER_DAY + 5_000).to_string(), "2d 0h 0m 5s");
    }

    #[test]
    fn test_non_increasing_while_approaching_target() {
        let target = parse_datetime("2025-03-01T12:00:00Z").unwrap();
        let mut now = target - Duration::milliseconds(7_777_777);
        let mut previous = duration_parts(millis_until(now, target));

        while now < target {
            now += Duration::milliseconds(333);
            let current = duration_parts(millis_until(now, target));
            assert!(current <= previous);
            previous = current;
        }

        assert!(duration_parts(millis_until(target, target)).is_zero());
    }

    #[test]
    fn test_millis_until_clamps_past_targets() {
        let now = parse_datetime("2025-03-01T12:00:00Z").unwrap();
        assert_eq!(millis_until(now, now - Duration::seconds(5)), 0);
        assert_eq!(millis_until(now, now + Duration::seconds(5)), 5_000);
    }

    #[test]
    fn test_manual_clock() {
        let start = parse_datetime("2025-03-01T12:00:00Z").unwrap();
        let clock = ManualClock::new(start);
        clock.advance(Duration::seconds(90));
        assert_eq!(clock.now(), start + Duration::seconds(90));
        clock.set(start);
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_parse_datetime() {
        assert!(parse_datetime("2024-01-15T12:00:00Z").is_some());
        assert!(parse_datetime("not a date").is_none());
    }
}
