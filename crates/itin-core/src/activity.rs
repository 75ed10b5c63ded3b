//! Scheduled activities within a journey day.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::types::{clock_format, minute_of_day};

/// The kind of place or entry scheduled in a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Stay,
    Activity,
    Food,
    Transport,
    /// Free-text note for the day. At most one per day.
    Note,
}

impl ActivityKind {
    /// Canonical upper-case name used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stay => "STAY",
            Self::Activity => "ACTIVITY",
            Self::Food => "FOOD",
            Self::Transport => "TRANSPORT",
            Self::Note => "NOTE",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = UnknownActivityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STAY" => Ok(Self::Stay),
            "ACTIVITY" => Ok(Self::Activity),
            "FOOD" => Ok(Self::Food),
            "TRANSPORT" => Ok(Self::Transport),
            "NOTE" => Ok(Self::Note),
            _ => Err(UnknownActivityKind(s.to_string())),
        }
    }
}

impl Serialize for ActivityKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ActivityKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown activity kind strings.
#[derive(Debug, Clone)]
pub struct UnknownActivityKind(String);

impl fmt::Display for UnknownActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown activity kind: {}", self.0)
    }
}

impl std::error::Error for UnknownActivityKind {}

/// A single scheduled item in a day.
///
/// Only `start_time`, `end_time` and the two manual flags take part in time
/// linking. The descriptive fields are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,

    #[serde(default, with = "clock_format")]
    pub start_time: Option<NaiveTime>,

    #[serde(default, with = "clock_format")]
    pub end_time: Option<NaiveTime>,

    /// The user set `start_time` directly; the engine must not overwrite it.
    #[serde(default)]
    pub has_manual_start: bool,

    /// The user set `end_time` directly; the engine must not overwrite it.
    #[serde(default)]
    pub has_manual_end: bool,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub address: String,

    /// Free text. For a NOTE this is the day's note.
    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,
}

impl Activity {
    /// Creates an activity of the given kind with the given times and no pins.
    pub fn new(kind: ActivityKind, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            kind,
            start_time: Some(start_time),
            end_time: Some(end_time),
            has_manual_start: false,
            has_manual_end: false,
            name: String::new(),
            address: String::new(),
            description: String::new(),
            latitude: None,
            longitude: None,
            photos: Vec::new(),
        }
    }

    pub const fn is_note(&self) -> bool {
        matches!(self.kind, ActivityKind::Note)
    }

    /// Whether the times satisfy `start < end`.
    ///
    /// An activity missing either time is considered valid.
    pub fn has_valid_times(&self) -> bool {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => minute_of_day(start) < minute_of_day(end),
            _ => true,
        }
    }
}

/// A single-field edit coming from the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldUpdate {
    Name(String),
    Address(String),
    Description(String),
    Latitude(Option<f64>),
    Longitude(Option<f64>),
    Photos(Vec<String>),
    /// Raw `HH:mm` text; empty clears the time.
    StartTime(String),
    /// Raw `HH:mm` text; empty clears the time.
    EndTime(String),
}

impl FieldUpdate {
    /// The snake_case field name, for logging.
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Address(_) => "address",
            Self::Description(_) => "description",
            Self::Latitude(_) => "latitude",
            Self::Longitude(_) => "longitude",
            Self::Photos(_) => "photos",
            Self::StartTime(_) => "start_time",
            Self::EndTime(_) => "end_time",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("food".parse::<ActivityKind>().unwrap(), ActivityKind::Food);
        assert_eq!(
            "TRANSPORT".parse::<ActivityKind>().unwrap(),
            ActivityKind::Transport
        );
        let err = "museum".parse::<ActivityKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown activity kind: museum");
    }

    #[test]
    fn valid_times_use_minute_of_day() {
        let mut activity = Activity::new(ActivityKind::Activity, hm(9, 0), hm(10, 0));
        assert!(activity.has_valid_times());

        activity.end_time = Some(hm(9, 0));
        assert!(!activity.has_valid_times());

        activity.end_time = None;
        assert!(activity.has_valid_times());
    }

    #[test]
    fn activity_serializes_times_as_clock_strings() {
        let mut activity = Activity::new(ActivityKind::Food, hm(12, 0), hm(13, 0));
        activity.end_time = None;
        let json = serde_json::to_value(&activity).unwrap();

        assert_eq!(json["type"], "FOOD");
        assert_eq!(json["startTime"], "12:00");
        assert_eq!(json["endTime"], "");
        assert_eq!(json["hasManualStart"], false);

        let parsed: Activity = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, activity);
    }

    #[test]
    fn field_update_wire_form() {
        let update: FieldUpdate =
            serde_json::from_str(r#"{"field":"end_time","value":"09:30"}"#).unwrap();
        assert_eq!(update, FieldUpdate::EndTime("09:30".to_string()));
        assert_eq!(update.field_name(), "end_time");
    }
}
