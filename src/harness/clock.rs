//! Module defining the clock the harness reads its timestamps from

use std::time::{Duration, Instant};

/// A monotonic time source. `now` is an offset from a fixed, clock-specific origin.
pub trait Clock {
    fn now(&mut self) -> Duration;
}

/// Wall-clock time based on [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }
}
