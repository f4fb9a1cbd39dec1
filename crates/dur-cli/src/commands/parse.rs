//! Parse command: turn each input into a minute count.

use std::io::Write;

use anyhow::Result;
use dur_core::{FormatStyle, format_duration, parse_str};
use serde::Serialize;

/// One line of `dur parse --json` output.
#[derive(Debug, Serialize)]
struct ParseOutput<'a> {
    input: &'a str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Parses every input and writes one result per input.
///
/// Returns how many inputs were rejected.
pub fn run<W: Write>(
    writer: &mut W,
    inputs: &[String],
    style: FormatStyle,
    json: bool,
    explain: bool,
) -> Result<usize> {
    let mut outputs = Vec::with_capacity(inputs.len());

    for input in inputs {
        let output = match parse_str(input) {
            Ok(minutes) => ParseOutput {
                input,
                ok: true,
                minutes: Some(minutes.get()),
                formatted: Some(format_duration(minutes.get(), style)),
                error: None,
            },
            Err(e) => {
                tracing::debug!(input = %input, error = %e, "rejected duration");
                ParseOutput {
                    input,
                    ok: false,
                    minutes: None,
                    formatted: None,
                    error: explain.then(|| e.to_string()),
                }
            }
        };
        outputs.push(output);
    }

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&outputs)?)?;
    } else {
        for output in &outputs {
            write_text(writer, output)?;
        }
    }

    Ok(outputs.iter().filter(|o| !o.ok).count())
}

fn write_text<W: Write>(writer: &mut W, output: &ParseOutput<'_>) -> Result<()> {
    match (output.minutes, &output.formatted, &output.error) {
        (Some(minutes), Some(formatted), _) => {
            writeln!(writer, "{}: {minutes} ({formatted})", output.input)?;
        }
        (_, _, Some(error)) => writeln!(writer, "{}: invalid ({error})", output.input)?,
        _ => writeln!(writer, "{}: invalid", output.input)?,
    }
    Ok(())
}
