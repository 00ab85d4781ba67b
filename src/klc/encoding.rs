//! KLC file encoding: UTF-16 little endian with BOM and CRLF line endings.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Byte order mark for UTF-16 LE.
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Line terminator written after every line.
pub const LINE_ENDING: &str = "\r\n";

/// Joins lines with CRLF, terminating the last line as well.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line.as_ref());
        text.push_str(LINE_ENDING);
    }
    text
}

/// Encodes text as UTF-16 LE with a leading BOM.
#[must_use]
pub fn encode_utf16_le(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(2 + text.len() * 2);
    bytes.extend_from_slice(&UTF16_LE_BOM);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

/// Writes lines to a KLC file.
///
/// Uses temp file + rename so a failed run never leaves half a file behind.
pub fn write_klc_file<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let bytes = encode_utf16_le(&join_lines(lines));
    let temp_path = path.with_extension("klc.tmp");

    fs::write(&temp_path, bytes)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
