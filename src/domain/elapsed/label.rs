//! Display label for the "since" counter

use std::fmt;

use super::duration::ElapsedDuration;

/// Default label prefix
pub const DEFAULT_SINCE_PREFIX: &str = "Né depuis";

/// Counter text: prefix followed by the elapsed breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinceLabel {
    prefix: String,
    elapsed: ElapsedDuration,
}

impl SinceLabel {
    pub fn new(prefix: impl Into<String>, elapsed: ElapsedDuration) -> Self {
        Self {
            prefix: prefix.into(),
            elapsed,
        }
    }

    pub fn elapsed(&self) -> ElapsedDuration {
        self.elapsed
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl fmt::Display for SinceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.prefix.trim();
        if prefix.is_empty() {
            write!(f, "{}", self.elapsed)
        } else {
            write!(f, "{} {}", prefix, self.elapsed)
        }
    }
}
