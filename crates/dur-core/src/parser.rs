//! Duration parsing entry points.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::Duration;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Malformation, ParseDurationError};
use crate::format::{FormatStyle, format_duration};
use crate::input::DurationInput;
use crate::{MAX_REASONABLE_DURATION_MINUTES, rules};

/// Text that is nothing but a decimal number is read as minutes.
static PLAIN_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").unwrap());

/// A validated duration in whole minutes.
///
/// Always within `1..=MAX_REASONABLE_DURATION_MINUTES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Minutes(u32);

impl Minutes {
    /// Validates a raw minute count against the reasonableness bound.
    pub fn new(minutes: i64) -> Result<Self, ParseDurationError> {
        match u32::try_from(minutes) {
            Ok(m) if m > 0 && m <= MAX_REASONABLE_DURATION_MINUTES => Ok(Self(m)),
            _ => Err(ParseDurationError::OutOfRange { minutes }),
        }
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::minutes(i64::from(self.0))
    }
}

impl TryFrom<i64> for Minutes {
    type Error = ParseDurationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Minutes> for u32 {
    fn from(minutes: Minutes) -> Self {
        minutes.0
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.0, FormatStyle::Compact))
    }
}

impl FromStr for Minutes {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}

/// Parses a number (already in minutes) or free text into validated minutes.
///
/// ```
/// use dur_core::parse;
///
/// assert_eq!(parse("2h 30m").map(|m| m.get()), Ok(150));
/// assert_eq!(parse("1,5h").map(|m| m.get()), Ok(90));
/// assert_eq!(parse(45).map(|m| m.get()), Ok(45));
/// assert!(parse("5h 35x").is_err());
/// ```
pub fn parse<'a>(input: impl Into<DurationInput<'a>>) -> Result<Minutes, ParseDurationError> {
    match input.into() {
        DurationInput::Missing => Err(ParseDurationError::EmptyInput),
        DurationInput::Unsupported(found) => Err(ParseDurationError::TypeMismatch { found }),
        DurationInput::Number(value) => from_number(value),
        DurationInput::Text(text) => parse_str(text),
    }
}

/// Parses free text.
pub fn parse_str(text: &str) -> Result<Minutes, ParseDurationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseDurationError::EmptyInput);
    }

    if PLAIN_NUMBER_RE.is_match(trimmed) {
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ParseDurationError::from(Malformation::NotANumber))?;
        return from_number(value);
    }

    let lowered = trimmed.to_lowercase();
    let components = rules::resolve(&lowered)?;
    Minutes::new(components.total_minutes())
}

/// Parses a JSON value as submitted by a form.
pub fn parse_json(value: &Value) -> Result<Minutes, ParseDurationError> {
    parse(value)
}

/// Truncates a minute count toward zero and validates it.
#[expect(
    clippy::cast_possible_truncation,
    reason = "float to int casts saturate and oversized values fail validation"
)]
fn from_number(value: f64) -> Result<Minutes, ParseDurationError> {
    if !value.is_finite() {
        return Err(Malformation::NotANumber.into());
    }
    Minutes::new(value.trunc() as i64)
}
