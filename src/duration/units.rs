//! Read-only views over one field of a [`Duration`].
//!
//! A view borrows its duration and adds the rounding and total helpers for
//! that unit:
//!
//! ```
//! use hour::duration::{Duration, Unit};
//!
//! let d = Duration::new(1, 25, 52).unwrap();
//! assert_eq!(d.minutes().value(), 25);
//! assert_eq!(d.minutes().round(), 26);
//! assert_eq!(d.minutes().total(), 85);
//! assert_eq!(d.minutes().round_total(), 86);
//! ```

use super::{Duration, MINUTES_PER_HOUR, SECS_PER_HOUR, SECS_PER_MINUTE};

/// Behavior shared by every unit view.
pub trait Unit {
    /// Unit name, e.g. `"minutes"`.
    fn name(&self) -> &'static str;

    /// The raw field value.
    fn value(&self) -> u64;

    /// The whole duration expressed in this unit, truncated.
    fn total(&self) -> u64;
}

/// Anything from half a unit up rounds to the next one.
fn rounds_up(lower: Option<u8>) -> bool {
    lower.is_some_and(|v| v >= 30)
}

#[derive(Debug, Clone, Copy)]
pub struct HourUnit<'a> {
    duration: &'a Duration,
}

impl<'a> HourUnit<'a> {
    pub const NAME: &'static str = "hours";

    pub(super) fn new(duration: &'a Duration) -> Self {
        Self { duration }
    }

    /// Hours, plus one when the minutes are 30 or more.
    pub fn round(&self) -> u64 {
        self.value() + u64::from(rounds_up(Some(self.duration.minutes)))
    }
}

impl Unit for HourUnit<'_> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn value(&self) -> u64 {
        u64::from(self.duration.hours)
    }

    fn total(&self) -> u64 {
        self.value()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MinuteUnit<'a> {
    duration: &'a Duration,
}

impl<'a> MinuteUnit<'a> {
    pub const NAME: &'static str = "minutes";

    pub(super) fn new(duration: &'a Duration) -> Self {
        Self { duration }
    }

    /// Minutes, plus one when the seconds are 30 or more. A seconds-absent
    /// duration never rounds up.
    pub fn round(&self) -> u64 {
        self.value() + u64::from(rounds_up(self.duration.seconds))
    }

    pub fn round_total(&self) -> u64 {
        self.total() + u64::from(rounds_up(self.duration.seconds))
    }
}

impl Unit for MinuteUnit<'_> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn value(&self) -> u64 {
        u64::from(self.duration.minutes)
    }

    fn total(&self) -> u64 {
        u64::from(self.duration.hours) * MINUTES_PER_HOUR + self.value()
    }
}

/// Only handed out for durations that track seconds.
#[derive(Debug, Clone, Copy)]
pub struct SecondUnit<'a> {
    duration: &'a Duration,
}

impl<'a> SecondUnit<'a> {
    pub const NAME: &'static str = "seconds";

    pub(super) fn new(duration: &'a Duration) -> Self {
        Self { duration }
    }
}

impl Unit for SecondUnit<'_> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn value(&self) -> u64 {
        u64::from(self.duration.seconds.unwrap_or(0))
    }

    fn total(&self) -> u64 {
        u64::from(self.duration.hours) * SECS_PER_HOUR
            + u64::from(self.duration.minutes) * SECS_PER_MINUTE
            + self.value()
    }
}
