//! Day and activity store behind the journey form.
//!
//! The store owns the ordered day list, the active day pointer and each day's
//! activity list. Time computation is delegated to [`crate::engine`]; the
//! store only decides *when* each rule runs and writes the returned list back.
//!
//! Operations never fail. Requests that would break an invariant (deleting the
//! last day, a second NOTE, an out-of-range index) are ignored and logged at
//! debug level.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::activity::{Activity, ActivityKind, FieldUpdate};
use crate::engine;
use crate::types::{DayLabel, parse_clock};

/// Calendar date of `day` for a journey starting on `start_date`.
///
/// Returns `None` only if the date would overflow the calendar.
pub fn date_for_day(start_date: NaiveDate, day: DayLabel) -> Option<NaiveDate> {
    let offset = u64::try_from(day.index()).ok()?;
    start_date.checked_add_days(Days::new(offset))
}

/// Ordered days with their activity lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    days: Vec<DayLabel>,
    active_day: DayLabel,
    activities: BTreeMap<DayLabel, Vec<Activity>>,
}

impl Default for Itinerary {
    fn default() -> Self {
        Self::new()
    }
}

impl Itinerary {
    /// Creates an itinerary with a single empty `Day 1`, active.
    pub fn new() -> Self {
        Self {
            days: vec![DayLabel::FIRST],
            active_day: DayLabel::FIRST,
            activities: BTreeMap::from([(DayLabel::FIRST, Vec::new())]),
        }
    }

    pub fn days(&self) -> &[DayLabel] {
        &self.days
    }

    pub const fn active_day(&self) -> DayLabel {
        self.active_day
    }

    /// Activities of `day`, in schedule order. Unknown days are empty.
    pub fn activities_for(&self, day: DayLabel) -> &[Activity] {
        self.activities.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn active_activities(&self) -> &[Activity] {
        self.activities_for(self.active_day)
    }

    /// Appends `Day {n+1}` with no activities and makes it active.
    pub fn add_day(&mut self) -> DayLabel {
        let label = DayLabel::from_index(self.days.len());
        self.days.push(label);
        self.activities.insert(label, Vec::new());
        self.active_day = label;
        tracing::debug!(day = %label, "added day");
        label
    }

    /// Deletes `day` and renumbers the remaining days contiguously.
    ///
    /// The last remaining day cannot be deleted. If the active day is deleted
    /// the pointer resets to `Day 1`, otherwise it follows its day to the new
    /// label.
    pub fn delete_day(&mut self, day: DayLabel) {
        if self.days.len() <= 1 {
            tracing::debug!(day = %day, "refusing to delete the only day");
            return;
        }
        let Some(removed_at) = self.days.iter().position(|d| *d == day) else {
            tracing::debug!(day = %day, "delete of unknown day ignored");
            return;
        };

        // Old label -> new label for every surviving day, in order.
        let remap: Vec<(DayLabel, DayLabel)> = self
            .days
            .iter()
            .copied()
            .filter(|d| *d != day)
            .enumerate()
            .map(|(new_index, old)| (old, DayLabel::from_index(new_index)))
            .collect();

        let mut old_lists = std::mem::take(&mut self.activities);
        self.activities = remap
            .iter()
            .map(|(old, new)| (*new, old_lists.remove(old).unwrap_or_default()))
            .collect();
        self.days = remap.iter().map(|(_, new)| *new).collect();

        self.active_day = if self.active_day == day {
            DayLabel::FIRST
        } else {
            remap
                .iter()
                .find(|(old, _)| *old == self.active_day)
                .map_or(DayLabel::FIRST, |(_, new)| *new)
        };

        tracing::debug!(
            day = %day,
            position = removed_at,
            remaining = self.days.len(),
            active = %self.active_day,
            "deleted day"
        );
    }

    /// Makes `day` the active day. Unknown days are ignored.
    pub fn select_day(&mut self, day: DayLabel) {
        if self.days.contains(&day) {
            self.active_day = day;
        } else {
            tracing::debug!(day = %day, "select of unknown day ignored");
        }
    }

    /// Appends a new activity of `kind` to the active day.
    ///
    /// Returns the new activity's index, or `None` when a second NOTE was
    /// requested for a day that already has one.
    pub fn add_activity(&mut self, kind: ActivityKind) -> Option<usize> {
        let current = self.active_activities();
        if kind == ActivityKind::Note && current.iter().any(Activity::is_note) {
            tracing::debug!(day = %self.active_day, "day already has a note");
            return None;
        }

        let (start, end) = engine::append_times(current);
        let mut next = current.to_vec();
        next.push(Activity::new(kind, start, end));
        let index = next.len() - 1;
        self.replace_active(next);
        Some(index)
    }

    /// Removes the activity at `index` and re-links the rest of the day.
    pub fn remove_activity(&mut self, index: usize) {
        let current = self.active_activities();
        if index >= current.len() {
            tracing::debug!(index, len = current.len(), "remove out of range ignored");
            return;
        }

        let mut remaining = current.to_vec();
        remaining.remove(index);
        let relinked = engine::relink_after_removal(&remaining);
        self.replace_active(relinked);
    }

    /// Applies a single-field edit to the activity at `index`.
    ///
    /// Time edits pin the edited boundary. An end-time edit also cascades to
    /// the following activities; a start-time edit never does.
    pub fn update_field(&mut self, index: usize, update: FieldUpdate) {
        let current = self.active_activities();
        if index >= current.len() {
            tracing::debug!(
                index,
                field = update.field_name(),
                "update out of range ignored"
            );
            return;
        }

        let mut next = current.to_vec();
        let mut carried_end = None;
        let activity = &mut next[index];

        match update {
            FieldUpdate::Name(value) => activity.name = value,
            FieldUpdate::Address(value) => activity.address = value,
            FieldUpdate::Description(value) => activity.description = value,
            FieldUpdate::Latitude(value) => activity.latitude = value,
            FieldUpdate::Longitude(value) => activity.longitude = value,
            FieldUpdate::Photos(value) => activity.photos = value,
            FieldUpdate::StartTime(value) => {
                let Some(time) = parse_time_input(&value) else {
                    return;
                };
                activity.start_time = time;
                activity.has_manual_start = true;
            }
            FieldUpdate::EndTime(value) => {
                let Some(time) = parse_time_input(&value) else {
                    return;
                };
                activity.end_time = time;
                activity.has_manual_end = true;
                carried_end = time;
            }
        }

        if let Some(carried) = carried_end {
            next = engine::cascade_forward(&next, index + 1, carried);
        }
        self.replace_active(next);
    }

    fn replace_active(&mut self, activities: Vec<Activity>) {
        self.activities.insert(self.active_day, activities);
    }
}

/// Interprets raw time input: empty clears, `HH:mm` sets, anything else is ignored.
fn parse_time_input(value: &str) -> Option<Option<chrono::NaiveTime>> {
    if value.trim().is_empty() {
        return Some(None);
    }
    match parse_clock(value) {
        Ok(time) => Some(Some(time)),
        Err(err) => {
            tracing::debug!(%err, "time edit ignored");
            None
        }
    }
}
