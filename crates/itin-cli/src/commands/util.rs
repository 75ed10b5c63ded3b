//! Shared utilities for CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use itin_core::Script;

use crate::Config;

/// Reads and parses an operation script from a JSON file.
pub fn load_script(path: &Path) -> Result<Script> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    let script: Script = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse script {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        operations = script.operations.len(),
        "loaded script"
    );
    Ok(script)
}

/// Picks the journey start date: explicit flag, then script, then config.
pub fn resolve_start_date(
    flag: Option<NaiveDate>,
    script: &Script,
    config: &Config,
) -> Option<NaiveDate> {
    flag.or(script.start_date).or(config.default_start_date)
}

/// Like [`resolve_start_date`], falling back to today's local date.
pub fn start_date_or_today(
    flag: Option<NaiveDate>,
    script: &Script,
    config: &Config,
) -> NaiveDate {
    resolve_start_date(flag, script, config).unwrap_or_else(|| Local::now().date_naive())
}
