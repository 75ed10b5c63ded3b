//! Show command for printing a replayed itinerary day by day.
//!
//! Pinned (manually edited) boundaries are marked with `*`.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use itin_core::{Activity, Itinerary, date_for_day};

use super::util::{load_script, resolve_start_date};
use crate::Config;

pub fn run<W: Write>(writer: &mut W, script_path: &Path, config: &Config) -> Result<()> {
    let script = load_script(script_path)?;
    let start_date = resolve_start_date(None, &script, config);
    let itinerary = script.replay();

    write!(writer, "{}", format_schedule(&itinerary, start_date))?;
    Ok(())
}

/// Renders every day of `itinerary` as an indented schedule.
pub fn format_schedule(itinerary: &Itinerary, start_date: Option<NaiveDate>) -> String {
    let mut output = String::new();

    for (i, &day) in itinerary.days().iter().enumerate() {
        if i > 0 {
            writeln!(output).unwrap();
        }

        write!(output, "{day}").unwrap();
        if let Some(date) = start_date.and_then(|start| date_for_day(start, day)) {
            write!(output, " ({date})").unwrap();
        }
        if day == itinerary.active_day() {
            write!(output, " [active]").unwrap();
        }
        writeln!(output).unwrap();

        let activities = itinerary.activities_for(day);
        if activities.is_empty() {
            writeln!(output, "  (no activities)").unwrap();
            continue;
        }
        for (index, activity) in activities.iter().enumerate() {
            writeln!(output, "{}", format_line(index, activity)).unwrap();
        }
    }

    output
}

fn format_line(index: usize, activity: &Activity) -> String {
    let pin = |pinned: bool| if pinned { '*' } else { ' ' };
    let clock = |time: Option<chrono::NaiveTime>| {
        time.map_or_else(|| "--:--".to_string(), |t| t.format("%H:%M").to_string())
    };
    let label = if activity.is_note() {
        &activity.description
    } else {
        &activity.name
    };

    let line = format!(
        "  {}. {:<9} {}{}-{}{} {}",
        index + 1,
        activity.kind,
        clock(activity.start_time),
        pin(activity.has_manual_start),
        clock(activity.end_time),
        pin(activity.has_manual_end),
        label,
    );
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use itin_core::{ActivityKind, FieldUpdate};

    use insta::assert_snapshot;

    fn sample() -> Itinerary {
        let mut itinerary = Itinerary::new();
        let stay = itinerary.add_activity(ActivityKind::Stay).unwrap();
        itinerary.update_field(stay, FieldUpdate::Name("Hotel Lumen".into()));
        itinerary.add_activity(ActivityKind::Activity);
        let note = itinerary.add_activity(ActivityKind::Note).unwrap();
        itinerary.update_field(note, FieldUpdate::Description("buy rail pass".into()));
        itinerary.update_field(0, FieldUpdate::EndTime("09:45".into()));
        itinerary.update_field(1, FieldUpdate::StartTime("10:00".into()));
        itinerary.add_day();
        itinerary.select_day(itinerary.days()[0]);
        itinerary
    }

    #[test]
    fn schedule_marks_pins_and_active_day() {
        let start = NaiveDate::from_ymd_opt(2025, 5, 3).unwrap();
        let output = format_schedule(&sample(), Some(start));

        assert_snapshot!(output, @r"
        Day 1 (2025-05-03) [active]
          1. STAY      09:00 -09:45* Hotel Lumen
          2. ACTIVITY  10:00*-10:45
          3. NOTE      10:45 -11:45  buy rail pass

        Day 2 (2025-05-04)
          (no activities)
        ");
    }

    #[test]
    fn schedule_without_start_date_omits_dates() {
        let output = format_schedule(&Itinerary::new(), None);
        assert_eq!(output, "Day 1 [active]\n  (no activities)\n");
    }

    #[test]
    fn run_replays_script_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("trip.json");
        std::fs::write(
            &path,
            r#"{"operations": [{"op": "add_activity", "kind": "FOOD", "name": "Brunch"}]}"#,
        )
        .unwrap();

        let mut output = Vec::new();
        run(&mut output, &path, &Config::default()).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "Day 1 [active]\n  1. FOOD      09:00 -10:00  Brunch\n"
        );
    }
}
