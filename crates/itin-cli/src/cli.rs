//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Journey itinerary tool.
///
/// Replays recorded itinerary editing sessions through the time-linking
/// engine and prints the resulting schedule or submission payload.
#[derive(Debug, Parser)]
#[command(name = "itin", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replay a script and print each day's schedule.
    Show {
        /// Path to the JSON operation script.
        script: PathBuf,
    },

    /// Replay a script and print the submission payload as JSON.
    Payload {
        /// Path to the JSON operation script.
        script: PathBuf,

        /// Journey start date (YYYY-MM-DD). Overrides the script and config.
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Print single-line JSON.
        #[arg(long)]
        compact: bool,
    },
}
