//! Total command: add up durations and compare against a budget.

use std::io::Write;

use anyhow::{Context, Result};
use dur_core::{FormatStyle, Minutes, Tally, format_duration, parse_str};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct TotalOutput {
    total_minutes: u64,
    total: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    budget_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remaining_minutes: Option<i64>,
}

/// Parses a single duration argument, naming it on failure.
fn parse_arg(input: &str) -> Result<Minutes> {
    parse_str(input).with_context(|| format!("invalid duration {input:?}"))
}

/// Renders a minute count that may exceed a single entry's ceiling.
fn format_total(minutes: u64, style: FormatStyle) -> Result<String> {
    let minutes = u32::try_from(minutes).context("total is too large to display")?;
    Ok(format_duration(minutes, style))
}

pub fn run<W: Write>(
    writer: &mut W,
    inputs: &[String],
    budget: Option<&str>,
    style: FormatStyle,
    json: bool,
) -> Result<()> {
    let mut tally = match budget {
        Some(budget) => Tally::new().with_budget(parse_arg(budget).context("invalid budget")?),
        None => Tally::new(),
    };
    for input in inputs {
        tally.add(parse_arg(input)?);
    }
    tracing::debug!(entries = tally.entries().len(), total = tally.total(), "computed total");

    let output = TotalOutput {
        total_minutes: tally.total(),
        total: format_total(tally.total(), style)?,
        budget_minutes: tally.budget().map(Minutes::get),
        remaining_minutes: tally.remaining().map(|d| d.num_minutes()),
    };

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    writeln!(writer, "Total: {} ({} minutes)", output.total, output.total_minutes)?;
    if let Some(budget) = tally.budget() {
        writeln!(writer, "Budget: {}", format_duration(budget.get(), style))?;
    }
    if let Some(remaining) = output.remaining_minutes {
        let amount = format_total(remaining.unsigned_abs(), style)?;
        if remaining < 0 {
            writeln!(writer, "Over budget: {amount}")?;
        } else {
            writeln!(writer, "Remaining: {amount}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn render(values: &[&str], budget: Option<&str>, json: bool) -> Result<String> {
        let inputs: Vec<String> = values.iter().map(ToString::to_string).collect();
        let mut output = Vec::new();
        run(&mut output, &inputs, budget, FormatStyle::Compact, json)?;
        Ok(String::from_utf8(output)?)
    }

    #[test]
    fn sums_mixed_formats() {
        let output = render(&["2h 30m", "1,5h", "45"], None, false).unwrap();
        assert_snapshot!(output, @"Total: 4h 45m (285 minutes)");
    }

    #[test]
    fn reports_remaining_budget() {
        let output = render(&["2h", "1h 30m"], Some("8h"), false).unwrap();
        assert_snapshot!(output, @r"
        Total: 3h 30m (210 minutes)
        Budget: 8h 0m
        Remaining: 4h 30m
        ");
    }

    #[test]
    fn reports_overrun() {
        let output = render(&["45m", "30m"], Some("1h"), false).unwrap();
        assert_snapshot!(output, @r"
        Total: 1h 15m (75 minutes)
        Budget: 1h 0m
        Over budget: 15m
        ");
    }

    #[test]
    fn json_output() {
        let output = render(&["20h", "10h"], Some("24h"), true).unwrap();
        assert_snapshot!(output, @r#"
        {
          "total_minutes": 1800,
          "total": "30h 0m",
          "budget_minutes": 1440,
          "remaining_minutes": -360
        }
        "#);
    }

    #[test]
    fn invalid_entry_names_the_input() {
        let err = render(&["2h", "5h 35x"], None, false).unwrap_err();
        assert_eq!(err.to_string(), "invalid duration \"5h 35x\"");
    }

    #[test]
    fn invalid_budget_is_reported() {
        let err = render(&["2h"], Some("soon"), false).unwrap_err();
        assert_eq!(err.to_string(), "invalid budget");
    }
}
