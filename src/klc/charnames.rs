//! Character lookup helpers for KLC comments and dead-key names.

use crate::constants::{DEAD_KEY_MARKER, NOT_DEFINED};

/// Parses a hexadecimal codepoint string into a character.
pub fn parse_codepoint(codepoint: &str) -> Option<char> {
    u32::from_str_radix(codepoint, 16)
        .ok()
        .and_then(char::from_u32)
}

/// Formats a character as a lowercase codepoint of at least four digits.
pub fn codepoint_of(character: char) -> String {
    format!("{:04x}", u32::from(character))
}

/// Returns the character for a codepoint string.
///
/// Strings longer than five digits, or that are not valid codepoints, are
/// returned unchanged.
pub fn char_from_codepoint(codepoint: &str) -> String {
    if codepoint.len() > 5 {
        return codepoint.to_string();
    }
    parse_codepoint(codepoint).map_or_else(|| codepoint.to_string(), String::from)
}

/// Returns the Unicode name of a codepoint, e.g. "DIGIT ONE".
///
/// Undefined outputs read `<none>`; a trailing dead-key marker is ignored;
/// characters without a name are reported as `PUA xxxx`.
pub fn describe_codepoint(codepoint: &str) -> String {
    if codepoint.is_empty() || codepoint == NOT_DEFINED {
        return "<none>".to_string();
    }
    let codepoint = codepoint.trim_end_matches(DEAD_KEY_MARKER);

    parse_codepoint(codepoint)
        .and_then(unicode_names2::name)
        .map_or_else(|| format!("PUA {codepoint}"), |name| name.to_string())
}
