//! Error types for duration parsing.

use thiserror::Error;

use crate::MAX_REASONABLE_DURATION_MINUTES;

/// Why a duration input was rejected.
///
/// Callers that only need a valid/invalid answer can collapse this with
/// `Result::ok`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseDurationError {
    /// Nothing was entered.
    #[error("duration cannot be empty")]
    EmptyInput,

    /// The value is neither a number nor a string.
    #[error("expected a number or a string, got {found}")]
    TypeMismatch { found: &'static str },

    /// The text did not match any accepted duration shape.
    #[error("malformed duration: {0}")]
    MalformedToken(Malformation),

    /// The text parsed, but the total is not a reasonable duration.
    #[error(
        "duration must be between 1 and {max} minutes, got {minutes}",
        max = MAX_REASONABLE_DURATION_MINUTES
    )]
    OutOfRange { minutes: i64 },
}

impl From<Malformation> for ParseDurationError {
    fn from(malformation: Malformation) -> Self {
        Self::MalformedToken(malformation)
    }
}

/// The grammar rule that rejected a piece of text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// Extra characters after the number following an hour token (`5h 35x`).
    #[error("unexpected characters after the minute value")]
    TrailingGarbage,

    /// Implicit minutes in `5h 35` shorthand were 60 or more.
    #[error("minutes after hours must be below 60")]
    ShorthandMinutesOutOfRange,

    #[error("hours cannot be negative")]
    NegativeHours,

    #[error("minutes cannot be negative")]
    NegativeMinutes,

    /// A minute token carried a fractional part (`1.5m`).
    #[error("minutes must be a whole number")]
    FractionalMinutes,

    /// An `h` marker with no number before it (`h30m`).
    #[error("missing hour value before 'h'")]
    MissingHourValue,

    /// An `m` marker with no number before it (`1h m`).
    #[error("missing minute value before 'm'")]
    MissingMinuteValue,

    /// No `h` or `m` token anywhere in the text.
    #[error("no hour or minute value found")]
    NoUnitToken,

    /// A numeric value that is NaN or infinite.
    #[error("not a finite number")]
    NotANumber,
}
