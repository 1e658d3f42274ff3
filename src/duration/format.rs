//! Text form of a [`Duration`]: `H:MM:SS` or, without seconds, `H:MM`.
//!
//! The hours segment is left out when it is zero (`52:00`). The alternate
//! flag (`{:#}`) always writes it, which is the form serde uses and the
//! form [`FromStr`] reads back.

use super::Duration;
use crate::error::{HourError, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

impl Duration {
    /// Parse colon-separated integers. Three segments (`H:M:S`) are
    /// expected when `include_seconds` is set, two (`H:M`) otherwise.
    /// Input segments need no zero padding.
    pub fn parse(text: &str, include_seconds: bool) -> Result<Self> {
        let segments: Vec<&str> = text.split(':').collect();
        let expected = if include_seconds { 3 } else { 2 };

        if segments.len() < expected {
            return Err(HourError::invalid(format!(
                "too few segments in '{text}': expected {expected}, found {}",
                segments.len()
            )));
        }
        if segments.len() > expected {
            return Err(HourError::invalid(format!(
                "too many segments in '{text}': expected {expected}, found {}",
                segments.len()
            )));
        }

        let values = segments
            .iter()
            .map(|segment| parse_segment(segment, text))
            .collect::<Result<Vec<u32>>>()?;
        tracing::debug!(text, ?values, "parsed duration segments");

        Self::create(values[0], values[1], values.get(2).copied())
    }
}

fn parse_segment(segment: &str, text: &str) -> Result<u32> {
    segment.trim().parse().map_err(|_| {
        HourError::invalid(format!(
            "segment '{segment}' in '{text}' is not a non-negative integer"
        ))
    })
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 || f.alternate() {
            write!(f, "{}:", self.hours)?;
        }
        write!(f, "{:02}", self.minutes)?;
        if let Some(seconds) = self.seconds {
            write!(f, ":{seconds:02}")?;
        }
        Ok(())
    }
}

/// Reads `H:MM:SS` as a seconds-tracked value and `H:MM` as a
/// seconds-absent one.
impl FromStr for Duration {
    type Err = HourError;

    fn from_str(s: &str) -> Result<Self> {
        let include_seconds = s.split(':').count() >= 3;
        Self::parse(s, include_seconds)
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{self:#}"))
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
