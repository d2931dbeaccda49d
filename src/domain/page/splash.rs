//! Splash timing

use std::time::Duration;

/// Minimum time the splash stays visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashTiming {
    min_duration: Duration,
}

impl SplashTiming {
    pub const fn new(min_duration: Duration) -> Self {
        Self { min_duration }
    }

    pub const fn min_duration(&self) -> Duration {
        self.min_duration
    }

    /// Time left to show the splash once loading took `elapsed`
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.min_duration.saturating_sub(elapsed)
    }
}
