//! Elapsed duration value object

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Milliseconds in one minute
pub const MILLIS_PER_MINUTE: i64 = 60_000;

/// Minutes in one day
pub const MINUTES_PER_DAY: u64 = 1_440;

/// Minutes in one hour
pub const MINUTES_PER_HOUR: u64 = 60;

/// Days/hours/minutes breakdown of a non-negative span.
///
/// Invariant: `days * 1440 + hours * 60 + minutes` equals the whole minutes
/// of the source span, with `hours < 24` and `minutes < 60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ElapsedDuration {
    days: u64,
    hours: u32,
    minutes: u32,
}

impl ElapsedDuration {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
    };

    /// Break down a whole number of minutes
    pub const fn from_total_minutes(total_minutes: u64) -> Self {
        Self {
            days: total_minutes / MINUTES_PER_DAY,
            hours: ((total_minutes % MINUTES_PER_DAY) / MINUTES_PER_HOUR) as u32,
            minutes: (total_minutes % MINUTES_PER_HOUR) as u32,
        }
    }

    /// Break down a millisecond count. Negative counts clamp to zero.
    pub const fn from_millis(millis: i64) -> Self {
        if millis <= 0 {
            return Self::ZERO;
        }
        Self::from_total_minutes((millis / MILLIS_PER_MINUTE) as u64)
    }

    /// Span from `reference` to `now`, clamped at zero
    pub fn between(reference: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_millis(now.signed_duration_since(reference).num_milliseconds())
    }

    pub const fn days(&self) -> u64 {
        self.days
    }

    pub const fn hours(&self) -> u32 {
        self.hours
    }

    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Whole minutes represented by this breakdown
    pub const fn total_minutes(&self) -> u64 {
        self.days * MINUTES_PER_DAY + self.hours as u64 * MINUTES_PER_HOUR + self.minutes as u64
    }
}

/// Days unbounded, hours and minutes on two digits
impl fmt::Display for ElapsedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} jours {:02} heures {:02} minutes",
            self.days, self.hours, self.minutes
        )
    }
}

/// Elapsed time between a reference instant and the current instant.
///
/// A reference after `now` yields [`ElapsedDuration::ZERO`].
pub fn format(reference: DateTime<Utc>, now: DateTime<Utc>) -> ElapsedDuration {
    ElapsedDuration::between(reference, now)
}
