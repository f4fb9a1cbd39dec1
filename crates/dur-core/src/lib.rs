//! Free-text duration parsing.
//!
//! This crate turns loosely formatted duration input into a validated count
//! of minutes:
//! - Parsing: `"2h 30m"`, `"45m"`, `"1.5h"`, `"1,5h"`, `"5h 35"`, `90`
//! - Formatting: canonical `"<h>h <m>m"` / `"<m>m"` strings
//! - Totals: summing durations against an optional budget

pub mod decimal;
mod error;
mod format;
mod input;
mod parser;
pub mod rules;
mod tally;

pub use error::{Malformation, ParseDurationError};
pub use format::{FormatStyle, UnknownFormatStyle, format_duration};
pub use input::DurationInput;
pub use parser::{Minutes, parse, parse_json, parse_str};
pub use tally::Tally;

/// Upper bound for a single accepted duration, in hours.
pub const MAX_REASONABLE_DURATION_HOURS: u32 = 24;

/// Upper bound for a single accepted duration, in minutes.
pub const MAX_REASONABLE_DURATION_MINUTES: u32 = MAX_REASONABLE_DURATION_HOURS * 60;
