//! Format command: print a minute count in canonical form.

use std::io::Write;

use anyhow::{Context, Result};
use dur_core::{FormatStyle, Minutes, format_duration};

pub fn run<W: Write>(writer: &mut W, minutes: i64, style: FormatStyle) -> Result<()> {
    let minutes =
        Minutes::new(minutes).with_context(|| format!("cannot format {minutes} minutes"))?;
    writeln!(writer, "{}", format_duration(minutes.get(), style))?;
    Ok(())
}
