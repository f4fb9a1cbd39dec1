//! Locale decimal normalization for numeric tokens.
//!
//! Users type fractional hours with either a dot (`1.5h`) or a comma
//! (`1,5h`). Every numeric token passes through [`normalize_decimal`] before
//! it is converted, so new separators only need to be handled here.

use std::borrow::Cow;

/// Characters accepted as a decimal separator.
pub const DECIMAL_SEPARATORS: [char; 2] = ['.', ','];

/// Rewrites a numeric token so that `str::parse::<f64>` accepts it.
///
/// - `,` becomes `.`
/// - a trailing separator with no fractional digits reads as `.0`
pub fn normalize_decimal(token: &str) -> Cow<'_, str> {
    let needs_comma_swap = token.contains(',');
    let dangling = token.ends_with(&DECIMAL_SEPARATORS[..]);

    if !needs_comma_swap && !dangling {
        return Cow::Borrowed(token);
    }

    let mut normalized = token.replace(',', ".");
    if dangling {
        normalized.push('0');
    }
    Cow::Owned(normalized)
}

/// Parses a (possibly comma-separated) decimal token.
pub fn parse_decimal(token: &str) -> Option<f64> {
    normalize_decimal(token).parse().ok()
}
