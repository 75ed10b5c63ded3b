//! Submission payload built from an itinerary.
//!
//! The payload is what the journey form sends on submit: one entry per day,
//! with the day's NOTE lifted out into `notes` and the remaining activities
//! listed in schedule order. Manual-edit flags stay internal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::activity::{Activity, ActivityKind};
use crate::itinerary::{Itinerary, date_for_day};
use crate::types::format_clock;

/// Whole-journey payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyPayload {
    pub start_date: NaiveDate,
    pub days: Vec<DayPayload>,
}

/// One day of the journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPayload {
    /// 1-based day number.
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Text of the day's NOTE, or empty.
    pub notes: String,
    pub places: Vec<PlacePayload>,
}

/// A scheduled place, with times as `HH:mm` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacePayload {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub name: String,
    pub address: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl From<&Activity> for PlacePayload {
    fn from(activity: &Activity) -> Self {
        Self {
            kind: activity.kind,
            name: activity.name.clone(),
            address: activity.address.clone(),
            description: activity.description.clone(),
            start_time: format_clock(activity.start_time),
            end_time: format_clock(activity.end_time),
            latitude: activity.latitude,
            longitude: activity.longitude,
            photos: activity.photos.clone(),
        }
    }
}

impl DayPayload {
    fn from_activities(day: u32, date: Option<NaiveDate>, activities: &[Activity]) -> Self {
        let notes = activities
            .iter()
            .find(|a| a.is_note())
            .map(|note| note.description.clone())
            .unwrap_or_default();
        let places = activities
            .iter()
            .filter(|a| !a.is_note())
            .map(PlacePayload::from)
            .collect();

        Self {
            day,
            date,
            notes,
            places,
        }
    }
}

impl Itinerary {
    /// Builds the submission payload for a journey starting on `start_date`.
    pub fn to_payload(&self, start_date: NaiveDate) -> JourneyPayload {
        let days = self
            .days()
            .iter()
            .map(|&day| {
                DayPayload::from_activities(
                    day.ordinal(),
                    date_for_day(start_date, day),
                    self.activities_for(day),
                )
            })
            .collect();

        JourneyPayload { start_date, days }
    }
}
