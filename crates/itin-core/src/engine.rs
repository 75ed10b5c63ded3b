//! Time-linking rules for a day's activity list.
//!
//! Every function here is pure: it reads a snapshot of the list and returns
//! new values, never mutating its input.
//!
//! # Rules
//!
//! 1. New activities start where the previous one ends (`append_times`)
//! 2. After a removal, unpinned boundaries re-link to their new neighbour
//!    (`relink_after_removal`)
//! 3. A manual end-time edit pushes later activities forward until a pinned
//!    start is reached (`cascade_forward`)
//!
//! Whenever a rule would produce `start >= end` it falls back to
//! [`default_times`] or stops, so the editor is never left stuck.

use chrono::NaiveTime;

use crate::activity::Activity;
use crate::types::{add_minutes, minute_of_day};

/// Length of an engine-assigned slot.
pub const SLOT_MINUTES: i64 = 60;

/// Start of the first slot in an empty day.
pub const DAY_START: NaiveTime = match NaiveTime::from_hms_opt(9, 0, 0) {
    Some(time) => time,
    None => panic!("09:00 is a valid time"),
};

/// Latest end time the engine will write.
pub const DAY_END: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 0) {
    Some(time) => time,
    None => panic!("23:59 is a valid time"),
};

/// Fallback times for the activity at `index`: `09:00 + index` hours, one hour long.
///
/// Used when no adjacent anchor exists or a linked pairing would be invalid.
/// The slot starting at 23:00 ends at [`DAY_END`] instead of wrapping, so the
/// result always satisfies `start < end`.
pub fn default_times(index: usize) -> (NaiveTime, NaiveTime) {
    // Hours wrap on the 24-hour clock, so only the remainder matters.
    let offset_hours = i64::try_from(index % 24).unwrap_or_default();
    let start = add_minutes(DAY_START, offset_hours * 60);
    let end = add_minutes(start, SLOT_MINUTES);
    if is_ordered(start, end) {
        (start, end)
    } else {
        (start, DAY_END)
    }
}

/// Times for an activity appended to the end of `activities`.
pub fn append_times(activities: &[Activity]) -> (NaiveTime, NaiveTime) {
    let index = activities.len();
    match activities.last().and_then(|previous| previous.end_time) {
        Some(anchor) => {
            let end = add_minutes(anchor, SLOT_MINUTES);
            if is_ordered(anchor, end) {
                (anchor, end)
            } else {
                tracing::debug!(index, "appended slot wraps past midnight, using default slot");
                default_times(index)
            }
        }
        None => default_times(index),
    }
}

fn is_ordered(start: NaiveTime, end: NaiveTime) -> bool {
    minute_of_day(start) < minute_of_day(end)
}

/// Re-links every unpinned boundary after an activity has been removed.
///
/// Walks left to right over the updated list so each activity anchors on its
/// neighbour's final end time. Running it twice gives the same result as once.
pub fn relink_after_removal(activities: &[Activity]) -> Vec<Activity> {
    let mut relinked = activities.to_vec();

    for i in 0..relinked.len() {
        let anchor = if i == 0 {
            None
        } else {
            relinked[i - 1].end_time
        };
        let (default_start, default_end) = default_times(i);
        let activity = &mut relinked[i];

        if !activity.has_manual_start {
            let start = anchor.unwrap_or(default_start);
            activity.start_time = Some(start);
            if !activity.has_manual_end {
                activity.end_time = Some(add_minutes(start, SLOT_MINUTES));
            }
        }

        if !activity.has_valid_times() {
            tracing::debug!(index = i, "relinked times invalid, using default slot");
            if !activity.has_manual_start {
                activity.start_time = Some(default_start);
            }
            if !activity.has_manual_end {
                activity.end_time = Some(default_end);
            }
        }
    }

    relinked
}

/// Propagates a new end time forward, starting at index `from`.
///
/// `carried` is the end time just written at `from - 1`. Each subsequent
/// activity behaves according to its pins:
///
/// - unpinned start and end: relay, takes `[carried, carried + 1h]` and keeps going
/// - pinned end only: takes `carried` as its start, then carries its own end
/// - pinned start: wall, the cascade stops and nothing after it changes
pub fn cascade_forward(activities: &[Activity], from: usize, carried: NaiveTime) -> Vec<Activity> {
    let mut updated = activities.to_vec();
    let mut carried = carried;

    for (j, activity) in updated.iter_mut().enumerate().skip(from) {
        if activity.has_manual_start {
            tracing::debug!(index = j, "cascade stopped at pinned start");
            break;
        }

        activity.start_time = Some(carried);

        if activity.has_manual_end {
            match activity.end_time {
                Some(end) if is_ordered(carried, end) => carried = end,
                _ => {
                    tracing::debug!(index = j, "cascade stopped at pinned end");
                    break;
                }
            }
        } else {
            let end = add_minutes(carried, SLOT_MINUTES);
            activity.end_time = Some(end);
            if !activity.has_valid_times() {
                tracing::debug!(index = j, "cascade wrapped past midnight, using default slot");
                let (default_start, default_end) = default_times(j);
                activity.start_time = Some(default_start);
                activity.end_time = Some(default_end);
                break;
            }
            carried = end;
        }
    }

    updated
}
