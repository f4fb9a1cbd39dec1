//! Canonical formatting of minute counts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a minute count is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// `45m` under an hour, `2h 30m` otherwise.
    #[default]
    Compact,
    /// Always both parts: `0h 45m`, `2h 0m`.
    Full,
}

impl FormatStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FormatStyle {
    type Err = UnknownFormatStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(Self::Compact),
            "full" => Ok(Self::Full),
            _ => Err(UnknownFormatStyle(s.to_string())),
        }
    }
}

/// Error type for unknown format style strings.
#[derive(Debug, Clone)]
pub struct UnknownFormatStyle(String);

impl fmt::Display for UnknownFormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown format style: {} (expected compact or full)", self.0)
    }
}

impl std::error::Error for UnknownFormatStyle {}

/// Renders minutes as `<h>h <m>m` (or `<m>m` under an hour in compact style).
///
/// Output always parses back to the same count.
pub fn format_duration(minutes: u32, style: FormatStyle) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match style {
        FormatStyle::Compact if hours == 0 => format!("{rest}m"),
        FormatStyle::Compact | FormatStyle::Full => format!("{hours}h {rest}m"),
    }
}
