//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dur_core::FormatStyle;

/// Free-text duration parser.
///
/// Turns shorthand such as "2h 30m", "1,5h" or "5h 35" into minutes.
#[derive(Debug, Parser)]
#[command(name = "dur", version, about, long_about = None)]
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
    /// Parse durations into minutes.
    Parse {
        /// Durations to parse (e.g. "2h 30m", 45m, 1.5h, 90).
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,

        /// Show why an input was rejected.
        #[arg(long)]
        explain: bool,
    },

    /// Print a minute count in canonical form.
    Format {
        /// Duration in minutes.
        #[arg(allow_negative_numbers = true)]
        minutes: i64,

        /// Output style: compact (45m) or full (0h 45m).
        #[arg(long)]
        style: Option<FormatStyle>,
    },

    /// Add up durations, optionally against a budget.
    Total {
        /// Durations to add.
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,

        /// Time available, e.g. 8h.
        #[arg(long)]
        budget: Option<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
