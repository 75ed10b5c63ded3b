//! Payload command for printing the submission payload of a replayed script.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use super::util::{load_script, start_date_or_today};
use crate::Config;

#[derive(Debug, Clone)]
pub struct PayloadArgs<'a> {
    pub script_path: &'a Path,
    pub start_date: Option<NaiveDate>,
    pub compact: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &PayloadArgs<'_>, config: &Config) -> Result<()> {
    let script = load_script(args.script_path)?;
    let start_date = start_date_or_today(args.start_date, &script, config);
    let payload = script.replay().to_payload(start_date);

    let json = if config.pretty_json && !args.compact {
        serde_json::to_string_pretty(&payload)
    } else {
        serde_json::to_string(&payload)
    }
    .context("failed to serialize payload")?;

    writeln!(writer, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    const SCRIPT: &str = r#"{
        "start_date": "2025-09-12",
        "operations": [
            {"op": "add_activity", "kind": "STAY", "name": "Ryokan"},
            {"op": "add_activity", "kind": "NOTE"},
            {"op": "update_field", "index": 1, "update": {"field": "description", "value": "onsen closes 22:00"}},
            {"op": "add_activity", "kind": "FOOD", "name": "Kaiseki"},
            {"op": "update_field", "index": 0, "update": {"field": "end_time", "value": "09:30"}}
        ]
    }"#;

    fn write_script(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("trip.json");
        std::fs::write(&path, SCRIPT).unwrap();
        path
    }

    #[test]
    fn payload_compact_output() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_script(temp.path());
        let args = PayloadArgs {
            script_path: &path,
            start_date: None,
            compact: true,
        };

        let mut output = Vec::new();
        run(&mut output, &args, &Config::default()).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r#"{"startDate":"2025-09-12","days":[{"day":1,"date":"2025-09-12","notes":"onsen closes 22:00","places":[{"type":"STAY","name":"Ryokan","address":"","description":"","startTime":"09:00","endTime":"09:30","photos":[]},{"type":"FOOD","name":"Kaiseki","address":"","description":"","startTime":"10:30","endTime":"11:30","photos":[]}]}]}"#);
    }

    #[test]
    fn start_date_flag_overrides_script() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_script(temp.path());
        let args = PayloadArgs {
            script_path: &path,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 5),
            compact: false,
        };

        let mut output = Vec::new();
        run(&mut output, &args, &Config::default()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["startDate"], "2026-01-05");
        assert_eq!(value["days"][0]["date"], "2026-01-05");
    }
}
