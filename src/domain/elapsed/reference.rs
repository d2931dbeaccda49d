//! Reference instant for the elapsed counter

use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::{debug, warn};

use crate::domain::error::ReferenceParseError;

/// Naive date-time layouts accepted without an offset (interpreted as local time)
const NAIVE_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Where a reference instant came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceSource {
    /// Parsed from the configured timestamp
    Configured,
    /// Substituted because the configured timestamp was missing or invalid
    Fallback,
}

/// A validated reference instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceInstant {
    instant: DateTime<Utc>,
    source: ReferenceSource,
}

impl ReferenceInstant {
    /// Wrap an already valid instant
    pub const fn configured(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            source: ReferenceSource::Configured,
        }
    }

    /// Substitute instant used when no valid reference exists
    pub const fn fallback(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            source: ReferenceSource::Fallback,
        }
    }

    /// Parse `input`, substituting `fallback` when missing or invalid.
    /// The formatter downstream therefore never sees an invalid reference.
    pub fn parse_or(input: Option<&str>, fallback: DateTime<Utc>) -> Self {
        match input.map(str::parse::<Self>) {
            Some(Ok(reference)) => reference,
            Some(Err(e)) => {
                warn!(error = %e, "reference date invalid, counting from now");
                Self::fallback(fallback)
            }
            None => {
                debug!("no reference date configured, counting from now");
                Self::fallback(fallback)
            }
        }
    }

    pub const fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub const fn source(&self) -> ReferenceSource {
        self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ReferenceSource::Fallback
    }
}

impl FromStr for ReferenceInstant {
    type Err = ReferenceParseError;

    /// Supported formats: RFC 3339 with offset, naive date-time (local),
    /// date only (local midnight)
    ///
    /// A date-only value is read as local midnight, not UTC midnight as an
    /// ISO date-only string would be under ECMAScript `Date` parsing. West of
    /// UTC the reference therefore sits a few hours later than a browser
    /// would place it. Give an explicit offset to pin the instant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let err = || ReferenceParseError {
            input: s.to_string(),
        };

        if input.is_empty() {
            return Err(err());
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self::configured(dt.with_timezone(&Utc)));
        }

        let naive = NAIVE_LAYOUTS
            .iter()
            .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(input, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
            .ok_or_else(err)?;

        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| Self::configured(dt.with_timezone(&Utc)))
            .ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn parse_rfc3339_with_offset() {
        let reference: ReferenceInstant = "1994-10-18T12:05:00+01:00".parse().unwrap();
        assert_eq!(
            reference.instant(),
            Utc.with_ymd_and_hms(1994, 10, 18, 11, 5, 0).unwrap()
        );
        assert_eq!(reference.source(), ReferenceSource::Configured);
    }

    #[test]
    fn parse_utc_suffix() {
        let reference: ReferenceInstant = "2000-01-01T00:00:00Z".parse().unwrap();
        assert_eq!(
            reference.instant(),
            Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn parse_date_only_as_local_midnight() {
        let reference: ReferenceInstant = "2001-02-03".parse().unwrap();
        let expected = Local
            .with_ymd_and_hms(2001, 2, 3, 0, 0, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(reference.instant(), expected);
    }

    #[test]
    fn parse_naive_datetime_as_local() {
        let reference: ReferenceInstant = "2001-02-03T04:05".parse().unwrap();
        let expected = Local
            .with_ymd_and_hms(2001, 2, 3, 4, 5, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(reference.instant(), expected);
    }

    #[test]
    fn parse_invalid() {
        assert!("".parse::<ReferenceInstant>().is_err());
        assert!("yesterday".parse::<ReferenceInstant>().is_err());
        assert!("1994-13-40".parse::<ReferenceInstant>().is_err());
    }

    #[test]
    fn parse_or_uses_configured_value() {
        let reference = ReferenceInstant::parse_or(Some("2000-01-01T00:00:00Z"), now());
        assert!(!reference.is_fallback());
    }

    #[test]
    fn parse_or_falls_back_on_invalid() {
        let reference = ReferenceInstant::parse_or(Some("not a date"), now());
        assert!(reference.is_fallback());
        assert_eq!(reference.instant(), now());
    }

    #[test]
    fn parse_or_falls_back_on_missing() {
        let reference = ReferenceInstant::parse_or(None, now());
        assert!(reference.is_fallback());
        assert_eq!(reference.instant(), now());
    }
}
