//! Clock durations split into hours, minutes and (optionally) seconds.
//!
//! A [`Duration`] is an immutable value. Arithmetic returns new instances
//! and every fallible operation reports an [`HourError`] instead of
//! panicking.
//!
//! An instance either tracks seconds or deliberately does not. The two
//! kinds print differently (`1:09:05` vs `1:09`) and cannot be combined by
//! [`Duration::checked_add`] or [`Duration::checked_sub`].

mod format;
mod units;

pub use units::{HourUnit, MinuteUnit, SecondUnit, Unit};

use crate::clock::{Clock, SystemClock};
use crate::error::{HourError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Deserialize;
use std::any::Any;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

pub(crate) const SECS_PER_MINUTE: u64 = 60;
pub(crate) const SECS_PER_HOUR: u64 = 60 * 60;
pub(crate) const MINUTES_PER_HOUR: u64 = 60;

const MIXED_SECONDS: &str = "cannot combine a seconds-tracked and seconds-absent duration";
const NEGATIVE: &str = "negative duration not supported";

#[derive(Debug, Clone, Copy)]
pub struct Duration {
    hours: u32,
    minutes: u8,
    seconds: Option<u8>,
}

/// Named fields for [`Duration::from_fields`]. Every field defaults to 0,
/// seconds included; set `seconds` to `None` for a seconds-absent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Fields {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: Option<u32>,
}

impl Default for Fields {
    fn default() -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: Some(0),
        }
    }
}

impl Duration {
    /// Build from explicit fields. `seconds: None` builds a seconds-absent
    /// instance.
    ///
    /// Minutes and seconds must be below 60; use [`Duration::from_overflow`]
    /// for larger totals.
    pub fn create(hours: u32, minutes: u32, seconds: Option<u32>) -> Result<Self> {
        if minutes >= 60 {
            return Err(HourError::invalid(format!(
                "minutes must be a number between 0 and 59, got {minutes}"
            )));
        }
        if let Some(s) = seconds.filter(|s| *s >= 60) {
            return Err(HourError::invalid(format!(
                "seconds must be a number between 0 and 59, got {s}"
            )));
        }

        Ok(Self {
            hours,
            minutes: minutes as u8,
            seconds: seconds.map(|s| s as u8),
        })
    }

    /// Seconds-tracked shorthand for [`Duration::create`].
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Result<Self> {
        Self::create(hours, minutes, Some(seconds))
    }

    pub fn from_fields(fields: Fields) -> Result<Self> {
        Self::create(fields.hours, fields.minutes, fields.seconds)
    }

    pub fn zero() -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: Some(0),
        }
    }

    /// Build from *either* minutes *or* seconds. Unlike [`Duration::create`]
    /// the value may be 60 or more and is carried into the larger units.
    ///
    /// ```
    /// use hour::duration::Duration;
    ///
    /// let d = Duration::from_overflow(85, 0).unwrap();
    /// assert_eq!(d.to_string(), "1:25:00");
    /// ```
    pub fn from_overflow(minutes: u64, seconds: u64) -> Result<Self> {
        if minutes != 0 && seconds != 0 {
            return Err(HourError::invalid("use either minutes or seconds, not both"));
        }

        if seconds == 0 {
            return Ok(Self {
                hours: hours_from(minutes / MINUTES_PER_HOUR)?,
                minutes: (minutes % MINUTES_PER_HOUR) as u8,
                seconds: Some(0),
            });
        }

        let whole_minutes = Self::from_overflow(seconds / SECS_PER_MINUTE, 0)?;
        let remainder = Self::new(0, 0, (seconds % SECS_PER_MINUTE) as u32)?;
        whole_minutes.checked_add(&remainder)
    }

    /// Current local time of day.
    pub fn now(include_seconds: bool) -> Self {
        Self::now_with(&SystemClock, include_seconds)
    }

    /// Current time of day as reported by `clock`. No normalization is
    /// applied to the clock reading.
    pub fn now_with(clock: &dyn Clock, include_seconds: bool) -> Self {
        let time = clock.now();
        tracing::debug!(%time, include_seconds, "read wall clock");
        Self::from_time(&time, include_seconds)
    }

    /// Build from the hour/minute/second components of any time of day.
    pub fn from_time<T: Timelike>(time: &T, include_seconds: bool) -> Self {
        Self {
            hours: time.hour(),
            minutes: time.minute() as u8,
            // Leap seconds are reported through nanoseconds; second() stays < 60.
            seconds: include_seconds.then(|| time.second() as u8),
        }
    }

    /// Place this value as a time of day on `date`.
    pub fn to_time_on(&self, date: NaiveDate) -> Result<NaiveDateTime> {
        let time = NaiveTime::from_hms_opt(
            self.hours,
            u32::from(self.minutes),
            u32::from(self.seconds.unwrap_or(0)),
        )
        .ok_or_else(|| {
            HourError::invalid(format!(
                "{self} is not a time of day (hours must be below 24)"
            ))
        })?;
        Ok(date.and_time(time))
    }

    pub fn has_seconds(&self) -> bool {
        self.seconds.is_some()
    }

    /// Same hours and minutes with the seconds component dropped.
    pub fn without_seconds(self) -> Self {
        Self {
            seconds: None,
            ..self
        }
    }

    pub fn hours(&self) -> HourUnit<'_> {
        HourUnit::new(self)
    }

    pub fn minutes(&self) -> MinuteUnit<'_> {
        MinuteUnit::new(self)
    }

    /// Seconds view, only available when seconds are tracked.
    pub fn seconds(&self) -> Option<SecondUnit<'_>> {
        self.seconds.map(|_| SecondUnit::new(self))
    }

    pub fn to_decimal_hours(&self) -> f64 {
        f64::from(self.hours)
            + f64::from(self.minutes) / 60.0
            + f64::from(self.seconds.unwrap_or(0)) / 3600.0
    }

    /// Total length in seconds. Absent seconds count as zero.
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * SECS_PER_HOUR
            + u64::from(self.minutes) * SECS_PER_MINUTE
            + u64::from(self.seconds.unwrap_or(0))
    }

    fn total_minutes(&self) -> u64 {
        u64::from(self.hours) * MINUTES_PER_HOUR + u64::from(self.minutes)
    }

    /// Sum of two durations, carrying seconds into minutes and minutes
    /// into hours.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        match (self.seconds, other.seconds) {
            (Some(_), Some(_)) => {
                Self::from_total_seconds(self.total_seconds() + other.total_seconds())
            }
            (None, None) => Self::from_total_minutes(self.total_minutes() + other.total_minutes()),
            _ => Err(HourError::invalid(MIXED_SECONDS)),
        }
    }

    /// Difference of two durations, borrowing across units. Fails when
    /// `other` is longer than `self`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        if self.has_seconds() != other.has_seconds() {
            return Err(HourError::invalid(MIXED_SECONDS));
        }
        if other.to_decimal_hours() > self.to_decimal_hours() {
            return Err(HourError::invalid(NEGATIVE));
        }

        if self.has_seconds() {
            Self::from_total_seconds(self.total_seconds() - other.total_seconds())
        } else {
            Self::from_total_minutes(self.total_minutes() - other.total_minutes())
        }
    }

    /// Multiply by a whole, non-negative factor.
    pub fn scale(&self, factor: f64) -> Result<Self> {
        if !factor.is_finite() || factor.fract() != 0.0 {
            return Err(HourError::invalid(format!(
                "scale factor must be a whole number, got {factor}"
            )));
        }
        if factor < 0.0 {
            return Err(HourError::invalid(NEGATIVE));
        }
        if factor > u32::MAX as f64 {
            return Err(HourError::invalid(format!(
                "scale factor {factor} is out of range"
            )));
        }
        let factor = factor as u64;

        if self.has_seconds() {
            let total = u64::from(self.hours) * SECS_PER_HOUR
                + u64::from(self.minutes) * SECS_PER_MINUTE
                + u64::from(self.seconds.unwrap_or(0));
            let scaled = total
                .checked_mul(factor)
                .ok_or_else(|| HourError::invalid("scaled duration is out of range"))?;
            Self::from_overflow(0, scaled)
        } else {
            let scaled = self
                .total_minutes()
                .checked_mul(factor)
                .ok_or_else(|| HourError::invalid("scaled duration is out of range"))?;
            Self::from_total_minutes(scaled)
        }
    }

    /// Add up a sequence of durations. An empty sequence yields zero.
    pub fn sum<'a, I>(durations: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Duration>,
    {
        let mut iter = durations.into_iter();
        let Some(first) = iter.next() else {
            return Ok(Self::zero());
        };
        iter.try_fold(*first, |acc, d| acc.checked_add(d))
    }

    /// Three-way comparison against a dynamically typed operand. A boxed
    /// `dyn Any` is looked through to the value it holds.
    pub fn try_cmp(&self, other: &dyn Any) -> Result<Ordering> {
        let other = match other.downcast_ref::<Box<dyn Any>>() {
            Some(boxed) => boxed.as_ref(),
            None => other,
        };
        other
            .downcast_ref::<Duration>()
            .map(|other| self.cmp(other))
            .ok_or(HourError::TypeMismatch {
                found: "a non-duration value",
            })
    }

    pub fn try_eq(&self, other: &dyn Any) -> Result<bool> {
        self.try_cmp(other).map(Ordering::is_eq)
    }

    pub fn try_lt(&self, other: &dyn Any) -> Result<bool> {
        self.try_cmp(other).map(Ordering::is_lt)
    }

    pub fn try_le(&self, other: &dyn Any) -> Result<bool> {
        self.try_cmp(other).map(Ordering::is_le)
    }

    pub fn try_gt(&self, other: &dyn Any) -> Result<bool> {
        self.try_cmp(other).map(Ordering::is_gt)
    }

    pub fn try_ge(&self, other: &dyn Any) -> Result<bool> {
        self.try_cmp(other).map(Ordering::is_ge)
    }

    fn from_total_seconds(total: u64) -> Result<Self> {
        let minutes = total / SECS_PER_MINUTE;
        Ok(Self {
            hours: hours_from(minutes / MINUTES_PER_HOUR)?,
            minutes: (minutes % MINUTES_PER_HOUR) as u8,
            seconds: Some((total % SECS_PER_MINUTE) as u8),
        })
    }

    fn from_total_minutes(total: u64) -> Result<Self> {
        Ok(Self {
            hours: hours_from(total / MINUTES_PER_HOUR)?,
            minutes: (total % MINUTES_PER_HOUR) as u8,
            seconds: None,
        })
    }
}

fn hours_from(hours: u64) -> Result<u32> {
    u32::try_from(hours).map_err(|_| HourError::invalid(format!("{hours} hours is out of range")))
}

impl Default for Duration {
    fn default() -> Self {
        Self::zero()
    }
}

// Equality and ordering follow total length; a seconds-absent value equals
// the tracked value with zero seconds.
impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.total_seconds() == other.total_seconds()
    }
}

impl Eq for Duration {}

impl Hash for Duration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_seconds().hash(state);
    }
}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Duration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_seconds().cmp(&other.total_seconds())
    }
}
