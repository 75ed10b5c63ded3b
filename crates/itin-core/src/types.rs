//! Core type definitions with validation.

use std::fmt;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parse errors for user-facing values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The day label was not of the form `Day N` with N >= 1.
    #[error("invalid day label: {value}")]
    InvalidDayLabel { value: String },

    /// The clock value was not a 24-hour `HH:mm` string.
    #[error("invalid clock time (expected HH:mm): {value}")]
    InvalidClockTime { value: String },
}

/// A 1-based day ordinal within a journey, displayed as `Day N`.
///
/// Labels are always contiguous within an [`Itinerary`](crate::Itinerary):
/// deleting a day renumbers the ones after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayLabel(u32);

impl DayLabel {
    /// The first day of every journey.
    pub const FIRST: Self = Self(1);

    /// Creates a label from a 1-based ordinal.
    pub fn new(ordinal: u32) -> Result<Self, ParseError> {
        if ordinal == 0 {
            return Err(ParseError::InvalidDayLabel {
                value: format!("Day {ordinal}"),
            });
        }
        Ok(Self(ordinal))
    }

    /// Label for a 0-based position in the day list.
    pub(crate) fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).map_or(u32::MAX, |i| i.saturating_add(1)))
    }

    /// Returns the 1-based ordinal.
    pub const fn ordinal(self) -> u32 {
        self.0
    }

    /// Returns the 0-based position of this day.
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}", self.0)
    }
}

impl std::str::FromStr for DayLabel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidDayLabel {
            value: s.to_string(),
        };
        let ordinal = s
            .trim()
            .strip_prefix("Day ")
            .ok_or_else(invalid)?
            .trim()
            .parse::<u32>()
            .map_err(|_| invalid())?;
        Self::new(ordinal).map_err(|_| invalid())
    }
}

impl TryFrom<String> for DayLabel {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayLabel> for String {
    fn from(label: DayLabel) -> Self {
        label.to_string()
    }
}

/// Parses a 24-hour `HH:mm` wall-clock string.
pub fn parse_clock(s: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| ParseError::InvalidClockTime {
        value: s.to_string(),
    })
}

/// Formats a wall-clock time as `HH:mm`, or an empty string when absent.
pub fn format_clock(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
}

/// Adds minutes on a 24-hour clock, wrapping past midnight.
pub fn add_minutes(time: NaiveTime, minutes: i64) -> NaiveTime {
    time.overflowing_add_signed(Duration::minutes(minutes)).0
}

/// Minutes since midnight, ignoring seconds.
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Serde adapter for `Option<NaiveTime>` as `"HH:mm"`, with `""` meaning absent.
pub mod clock_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_clock(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.trim().is_empty() {
            return Ok(None);
        }
        super::parse_clock(&s)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
