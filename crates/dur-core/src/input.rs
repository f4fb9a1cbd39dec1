//! Raw duration input as handed over by a form or a JSON payload.

use serde_json::Value;

/// A value to be parsed as a duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationInput<'a> {
    /// No value at all (`null`, an absent field).
    Missing,
    /// A number, already expressed in minutes.
    Number(f64),
    /// Free text such as `"2h 30m"`.
    Text(&'a str),
    /// Any other kind of value; carries the kind's name for error reporting.
    Unsupported(&'static str),
}

impl<'a> From<&'a str> for DurationInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for DurationInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for DurationInput<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for DurationInput<'_> {
    #[expect(
        clippy::cast_precision_loss,
        reason = "values beyond 2^53 minutes are rejected as out of range anyway"
    )]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for DurationInput<'_> {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for DurationInput<'_> {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl<'a, T> From<Option<T>> for DurationInput<'a>
where
    T: Into<DurationInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

impl<'a> From<&'a Value> for DurationInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Number(n) => n.as_f64().map_or(Self::Unsupported("number"), Self::Number),
            Value::String(s) => Self::Text(s),
            Value::Bool(_) => Self::Unsupported("boolean"),
            Value::Array(_) => Self::Unsupported("array"),
            Value::Object(_) => Self::Unsupported("object"),
        }
    }
}
