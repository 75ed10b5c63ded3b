//! Itinerary CLI library.
//!
//! This crate provides the CLI interface for replaying itinerary editing
//! sessions.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
