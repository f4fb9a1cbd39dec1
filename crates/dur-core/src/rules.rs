//! Ordered grammar rules for textual durations.
//!
//! Text that is not a plain number goes through [`RULES`] in order. Each rule
//! either passes the text on, rejects it, or accepts it with extracted
//! hour/minute components. The first rule that does not pass decides.
//!
//! 1. [`Rule::TrailingGarbage`]: `5h 35x` is rejected outright.
//! 2. [`Rule::SmartShorthand`]: `5h 35` reads the bare number as minutes.
//! 3. [`Rule::SuffixTokens`]: `2h 30m`, `1,5h`, `45m` via `h`/`m` tokens.
//!
//! All rules expect lower-cased, trimmed text.

use std::sync::LazyLock;

use regex::Regex;

use crate::decimal::{DECIMAL_SEPARATORS, parse_decimal};
use crate::error::Malformation;

/// `<hours>h <digits>` followed by a character that is not a digit or `m`,
/// or by anything directly after an explicit `m`.
static TRAILING_GARBAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+(?:[.,][0-9]+)?h\s+[0-9]+(?:[^0-9m]|m\S)").unwrap()
});

/// The whole text is `<hours>h` then a run of whitespace then 1-2 digits.
static SHORTHAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+(?:[.,][0-9]+)?)h\s+([0-9]{1,2})$").unwrap());

static HOURS_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-?[0-9]+(?:[.,][0-9]*)?)h").unwrap());

static MINUTES_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-?[0-9]+)m").unwrap());

/// A named grammar rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    TrailingGarbage,
    SmartShorthand,
    SuffixTokens,
}

/// Rules in precedence order.
pub const RULES: [Rule; 3] = [
    Rule::TrailingGarbage,
    Rule::SmartShorthand,
    Rule::SuffixTokens,
];

/// Hour and minute parts extracted from text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Components {
    /// Possibly fractional hours, never negative.
    pub hours: f64,
    /// Whole minutes, never negative.
    pub minutes: i64,
}

impl Components {
    /// Total minutes, with the hour contribution rounded to the nearest minute.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float to int casts saturate and oversized totals fail validation"
    )]
    pub fn total_minutes(&self) -> i64 {
        let from_hours = (self.hours * 60.0).round() as i64;
        from_hours.saturating_add(self.minutes)
    }
}

/// Outcome of applying a single rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// The rule does not apply; try the next one.
    Pass,
    Reject(Malformation),
    Accept(Components),
}

impl Rule {
    pub fn apply(self, text: &str) -> Verdict {
        match self {
            Self::TrailingGarbage => trailing_garbage(text),
            Self::SmartShorthand => smart_shorthand(text),
            Self::SuffixTokens => suffix_tokens(text),
        }
    }
}

/// Runs [`RULES`] in order and returns the first decision.
pub fn resolve(text: &str) -> Result<Components, Malformation> {
    for rule in RULES {
        match rule.apply(text) {
            Verdict::Pass => {}
            Verdict::Reject(malformation) => {
                tracing::trace!(?rule, ?malformation, text, "rule rejected duration");
                return Err(malformation);
            }
            Verdict::Accept(components) => {
                tracing::trace!(?rule, ?components, text, "rule accepted duration");
                return Ok(components);
            }
        }
    }
    Err(Malformation::NoUnitToken)
}

fn trailing_garbage(text: &str) -> Verdict {
    if TRAILING_GARBAGE_RE.is_match(text) {
        Verdict::Reject(Malformation::TrailingGarbage)
    } else {
        Verdict::Pass
    }
}

fn smart_shorthand(text: &str) -> Verdict {
    let Some(caps) = SHORTHAND_RE.captures(text) else {
        return Verdict::Pass;
    };

    let Some(hours) = parse_decimal(&caps[1]) else {
        return Verdict::Reject(Malformation::NotANumber);
    };
    // At most two digits, so this always fits.
    let minutes: i64 = caps[2].parse().unwrap_or(i64::MAX);
    if minutes >= 60 {
        return Verdict::Reject(Malformation::ShorthandMinutesOutOfRange);
    }

    Verdict::Accept(Components { hours, minutes })
}

fn suffix_tokens(text: &str) -> Verdict {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let hours = match HOURS_TOKEN_RE.captures(&compact) {
        Some(caps) => match parse_decimal(&caps[1]) {
            Some(h) if h < 0.0 => return Verdict::Reject(Malformation::NegativeHours),
            Some(h) => Some(h),
            None => return Verdict::Reject(Malformation::NotANumber),
        },
        None => None,
    };

    let minutes = match MINUTES_TOKEN_RE.captures(&compact) {
        Some(caps) => {
            let token = caps.get(1).map_or("", |m| m.as_str());
            let start = caps.get(0).map_or(0, |m| m.start());
            if follows_decimal_separator(&compact[..start]) {
                return Verdict::Reject(Malformation::FractionalMinutes);
            }
            let value = parse_whole(token);
            if value < 0 {
                return Verdict::Reject(Malformation::NegativeMinutes);
            }
            Some(value)
        }
        None => None,
    };

    if text.starts_with('h') && minutes.is_some() {
        return Verdict::Reject(Malformation::MissingHourValue);
    }
    if text.contains("h m") {
        return Verdict::Reject(Malformation::MissingMinuteValue);
    }
    if hours.is_none() && minutes.is_none() {
        return Verdict::Reject(Malformation::NoUnitToken);
    }

    Verdict::Accept(Components {
        hours: hours.unwrap_or(0.0),
        minutes: minutes.unwrap_or(0),
    })
}

/// True when `before` ends in `<digit><separator>`, i.e. the token that
/// follows is the fractional part of a decimal. A separator after a unit
/// letter (`1h, 30m`) is plain punctuation.
fn follows_decimal_separator(before: &str) -> bool {
    before
        .strip_suffix(&DECIMAL_SEPARATORS[..])
        .is_some_and(|rest| rest.ends_with(|c: char| c.is_ascii_digit()))
}

/// Parses an optionally signed run of ASCII digits, saturating on overflow.
fn parse_whole(token: &str) -> i64 {
    token.parse().unwrap_or_else(|_| {
        if token.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}
