//! Wall-clock source consumed by [`Duration::now`](crate::duration::Duration::now).
//!
//! The clock is injected so callers (and tests) can pin the time of day.

use chrono::{Local, NaiveTime};

/// Source of the current time of day.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}

/// Local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Clock frozen at a single time of day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
