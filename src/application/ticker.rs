//! Periodic refresh of the "since" counter

use std::future::Future;
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use crate::domain::elapsed::{self, ReferenceInstant, SinceLabel};

use super::ports::Clock;

/// Default refresh period (minute resolution needs nothing faster)
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(30);

/// Re-evaluates the counter on a fixed period.
/// Formatting stays pure; this type only owns the schedule.
pub struct SinceTicker<C: Clock> {
    clock: C,
    reference: ReferenceInstant,
    prefix: String,
    period: Duration,
}

impl<C: Clock> SinceTicker<C> {
    pub fn new(clock: C, reference: ReferenceInstant, prefix: impl Into<String>) -> Self {
        Self {
            clock,
            reference,
            prefix: prefix.into(),
            period: DEFAULT_TICK_PERIOD,
        }
    }

    /// Override the refresh period. A zero period is replaced by the default.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = if period.is_zero() {
            DEFAULT_TICK_PERIOD
        } else {
            period
        };
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current label
    pub fn label_now(&self) -> SinceLabel {
        SinceLabel::new(
            self.prefix.clone(),
            elapsed::format(self.reference.instant(), self.clock.now()),
        )
    }

    /// Emit a label immediately and then once per period until `shutdown` resolves.
    ///
    /// # Returns
    /// Number of labels emitted
    pub async fn run<S, F>(&self, shutdown: S, mut on_tick: F) -> usize
    where
        S: Future<Output = ()>,
        F: FnMut(&SinceLabel),
    {
        tokio::pin!(shutdown);
        let mut interval = time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks = 0;

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = interval.tick() => {
                    on_tick(&self.label_now());
                    ticks += 1;
                }
            }
        }

        debug!(ticks, "since ticker stopped");
        ticks
    }
}
