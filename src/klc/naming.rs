//! KLC file naming.
//!
//! MSKLC builds a DLL named after the `.klc` file, and the DLL name must fit
//! the 8.3 scheme without periods or spaces.

use anyhow::{Context, Result};
use std::path::Path;

/// Longest file stem MSKLC accepts.
pub const MAX_STEM_LEN: usize = 8;

/// Returns the keyboard name of an input file, i.e. its file stem.
pub fn keyboard_name(path: &Path) -> Result<String> {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("Input file has no usable name: {}", path.display()))?;
    Ok(stem.to_string())
}

/// Derives the 8.3 KLC file name for a keyboard name.
///
/// Periods and spaces are removed. A trailing number survives truncation
/// and is joined with an underscore, so `Layout Series 12` becomes
/// `Layou_12.klc`.
///
/// # Errors
///
/// Fails when the trailing number alone leaves no room for the underscore.
pub fn klc_filename(keyboard_name: &str) -> Result<String> {
    let name: String = keyboard_name
        .chars()
        .filter(|c| *c != '.' && *c != ' ')
        .collect();

    let prefix = name.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &name[prefix.len()..];

    if digits.is_empty() {
        return Ok(format!("{}.klc", truncate(&name, MAX_STEM_LEN)));
    }

    let Some(room) = MAX_STEM_LEN.checked_sub(digits.len() + 1) else {
        anyhow::bail!(
            "Too many digits for a Windows-style (8+3) filename: '{keyboard_name}'. \
             Please rename the source file."
        );
    };

    Ok(format!("{}_{}.klc", truncate(&name, room), digits))
}

/// The `KBD` identifier for a KLC file name (its stem).
#[must_use]
pub fn kbd_identifier(klc_filename: &str) -> &str {
    klc_filename.strip_suffix(".klc").unwrap_or(klc_filename)
}

fn truncate(name: &str, max_chars: usize) -> &str {
    name.char_indices()
        .nth(max_chars)
        .map_or(name, |(end, _)| &name[..end])
}
