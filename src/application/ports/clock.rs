//! Clock port interface

use chrono::{DateTime, Utc};

/// Port for reading the current wall-clock instant.
/// Callers pass the instant into pure formatters instead of reading it there.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
