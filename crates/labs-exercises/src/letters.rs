//! Letter frequency counter

use std::collections::BTreeMap;
use std::io::{self, Write};

use labs_core::LabError;
use log::debug;

pub const DEFAULT_TEXT: &str = "hello world";

/// Count every non-whitespace character in `text`
#[must_use]
pub fn count_letters(text: &str) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        *counts.entry(c).or_insert(0) += 1;
    }
    debug!("{} distinct character(s) in {} byte(s)", counts.len(), text.len());
    counts
}

/// Print one `<char>: <count>` line per entry
///
/// # Errors
///
/// Returns `LabError::Io` if writing fails
pub fn render_frequencies<W: Write>(
    counts: &BTreeMap<char, usize>,
    output: &mut W,
) -> Result<(), LabError> {
    for (letter, count) in counts {
        writeln!(output, "{letter}: {count}")?;
    }
    Ok(())
}

/// Print the counts as a pretty JSON object keyed by character
///
/// # Errors
///
/// Returns `LabError::Io` if writing fails
pub fn render_frequencies_json<W: Write>(
    counts: &BTreeMap<char, usize>,
    output: &mut W,
) -> Result<(), LabError> {
    let object: serde_json::Map<String, serde_json::Value> = counts
        .iter()
        .map(|(letter, count)| (letter.to_string(), (*count).into()))
        .collect();
    serde_json::to_writer_pretty(&mut *output, &object).map_err(io::Error::from)?;
    writeln!(output)?;
    Ok(())
}
