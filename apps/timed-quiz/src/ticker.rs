//! Repeating tick source for the quiz countdown.

use std::time::{Duration, Instant};

/// A cancellable periodic tick source driven by the event loop.
///
/// The ticker owns no thread; the loop calls [`Ticker::poll`] with the
/// current time and receives the number of periods that elapsed.
#[derive(Debug, Clone)]
pub struct Ticker {
    /// Tick period.
    period: Duration,
    /// When the next tick fires (None if stopped).
    next_due: Option<Instant>,
}

impl Ticker {
    /// Create a stopped ticker with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// One tick per second.
    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Start ticking from `now`. Does nothing if already running.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    /// Stop ticking. Safe to call more than once.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Time left until the next tick.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Count the ticks due at `now` and schedule the following one.
    ///
    /// Returns 0 when stopped. Late polls catch up on every missed period.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };

        let mut ticks = 0;
        while due <= now {
            ticks += 1;
            due += self.period;
        }

        self.next_due = Some(due);
        ticks
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::every_second()
    }
}
