//! Replayable editor operations.
//!
//! An editing session is a sequence of [`Operation`]s. Replaying the same
//! sequence on a fresh [`Itinerary`] always gives the same result, which is
//! what the CLI and the tests rely on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::activity::{ActivityKind, FieldUpdate};
use crate::itinerary::Itinerary;
use crate::types::DayLabel;

/// One editor action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    AddDay,
    DeleteDay {
        day: DayLabel,
    },
    SelectDay {
        day: DayLabel,
    },
    /// Adds an activity to the active day, optionally naming it.
    AddActivity {
        kind: ActivityKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    RemoveActivity {
        index: usize,
    },
    UpdateField {
        index: usize,
        update: FieldUpdate,
    },
}

/// A recorded editing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl Script {
    /// Replays every operation on a fresh itinerary.
    pub fn replay(&self) -> Itinerary {
        let mut itinerary = Itinerary::new();
        for operation in &self.operations {
            itinerary.apply(operation.clone());
        }
        itinerary
    }
}

impl Itinerary {
    /// Applies a single operation.
    pub fn apply(&mut self, operation: Operation) {
        tracing::trace!(?operation, "applying");
        match operation {
            Operation::AddDay => {
                self.add_day();
            }
            Operation::DeleteDay { day } => self.delete_day(day),
            Operation::SelectDay { day } => self.select_day(day),
            Operation::AddActivity { kind, name } => {
                if let (Some(index), Some(name)) = (self.add_activity(kind), name) {
                    self.update_field(index, FieldUpdate::Name(name));
                }
            }
            Operation::RemoveActivity { index } => self.remove_activity(index),
            Operation::UpdateField { index, update } => self.update_field(index, update),
        }
    }
}
