//! Wall clock line

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// Day-first layout with seconds
pub const CLOCK_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Render `now` as `DD/MM/YYYY HH:MM:SS` in its own time zone
pub fn clock_text<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format(CLOCK_FORMAT).to_string()
}
