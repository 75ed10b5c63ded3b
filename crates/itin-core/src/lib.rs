//! Core domain logic for the journey itinerary editor.
//!
//! This crate contains:
//! - Itinerary: the day and activity store behind the journey form
//! - Engine: the time-linking rules that keep a day's schedule consistent
//! - Payload: the per-day submission shape produced from the store
//! - Script: replayable editor operations

pub mod activity;
pub mod engine;
mod itinerary;
pub mod payload;
pub mod script;
pub mod types;

pub use activity::{Activity, ActivityKind, FieldUpdate, UnknownActivityKind};
pub use itinerary::{Itinerary, date_for_day};
pub use payload::{DayPayload, JourneyPayload, PlacePayload};
pub use script::{Operation, Script};
pub use types::{DayLabel, ParseError};
