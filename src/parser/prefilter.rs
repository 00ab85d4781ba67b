//! Text-level normalisation of `.keylayout` files before XML parsing.
//!
//! macOS layouts declare XML 1.1 so that control characters can be written as
//! `&#x0008;`, which XML 1.0 parsers reject. Every `output` attribute is
//! therefore rewritten to a plain codepoint string (`"0061"`) before the
//! document reaches the tree parser. Outputs with more than one character are
//! not supported and are replaced by a placeholder codepoint.

use crate::diagnostics::Diagnostic;
use crate::klc::charnames::codepoint_of;
use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Declaration placed at the top of every filtered document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Result of filtering a source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredSource {
    /// XML 1.0 text with every output attribute normalised to a codepoint
    pub xml: String,
    /// Substitutions made along the way
    pub diagnostics: Vec<Diagnostic>,
}

fn declaration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*<\?xml[^>]*\?>").expect("valid declaration regex"))
}

fn output_attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\boutput\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid output regex")
    })
}

/// Decodes raw file bytes, honouring UTF-8 and UTF-16 byte order marks.
pub fn decode_source(bytes: &[u8]) -> Result<String> {
    match bytes {
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        [0xEF, 0xBB, 0xBF, rest @ ..] => {
            String::from_utf8(rest.to_vec()).context("Source file is not valid UTF-8")
        }
        _ => String::from_utf8(bytes.to_vec()).context("Source file is not valid UTF-8"),
    }
}

fn decode_utf16(bytes: &[u8], read: fn([u8; 2]) -> u16) -> Result<String> {
    if bytes.len() % 2 != 0 {
        anyhow::bail!("Source file has an odd number of bytes for UTF-16");
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| read([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).context("Source file is not valid UTF-16")
}

/// Rewrites a raw `.keylayout` document into parser-ready XML 1.0.
///
/// # Arguments
///
/// * `raw` - The decoded file contents
/// * `placeholder` - Codepoint inserted for outputs that are not a single character
pub fn filter_keylayout(raw: &str, placeholder: &str) -> FilteredSource {
    let body = match declaration_regex().find(raw) {
        Some(found) => &raw[found.end()..],
        None => raw,
    };

    let mut diagnostics = Vec::new();
    let normalised = output_attribute_regex().replace_all(body, |caps: &Captures<'_>| {
        let value = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map_or("", |m| m.as_str());
        let codepoint = normalise_output(value, placeholder, &mut diagnostics);
        format!("output=\"{codepoint}\"")
    });

    let mut xml = String::with_capacity(XML_DECLARATION.len() + normalised.len() + 1);
    xml.push_str(XML_DECLARATION);
    if !normalised.starts_with(['\n', '\r']) {
        xml.push('\n');
    }
    xml.push_str(&normalised);

    FilteredSource { xml, diagnostics }
}

/// Converts one attribute value into a codepoint string.
fn normalise_output(value: &str, placeholder: &str, diagnostics: &mut Vec<Diagnostic>) -> String {
    if value.is_empty() {
        return String::new();
    }

    let decoded = decode_attribute(value);
    let mut chars = decoded.as_deref().unwrap_or_default().chars();
    match (chars.next(), chars.next()) {
        (Some(single), None) => codepoint_of(single),
        _ => {
            tracing::debug!(value, "replacing unsupported output with placeholder");
            diagnostics.push(Diagnostic::LigatureReplaced {
                source: value.to_string(),
                placeholder: placeholder.to_string(),
            });
            placeholder.to_string()
        }
    }
}

/// Expands character references and predefined entities in an attribute value.
///
/// Returns `None` for unknown entities or references to invalid codepoints.
fn decode_attribute(value: &str) -> Option<String> {
    let mut decoded = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find('&') {
        decoded.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find(';')?;
        let entity = &after[..end];

        let character = if let Some(hex) = entity
            .strip_prefix("#x")
            .or_else(|| entity.strip_prefix("#X"))
        {
            u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)?
        } else if let Some(decimal) = entity.strip_prefix('#') {
            decimal.parse::<u32>().ok().and_then(char::from_u32)?
        } else {
            match entity {
                "amp" => '&',
                "lt" => '<',
                "gt" => '>',
                "quot" => '"',
                "apos" => '\'',
                _ => return None,
            }
        };

        decoded.push(character);
        rest = &after[end + 1..];
    }

    decoded.push_str(rest);
    Some(decoded)
}
