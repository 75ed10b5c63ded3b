//! CLI subcommand implementations.

pub mod payload;
pub mod show;
pub mod util;
