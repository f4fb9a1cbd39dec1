//! CLI subcommand implementations.

pub mod format;
pub mod parse;
pub mod total;
