//! Non-fatal conversion diagnostics.
//!
//! Anything the converter skips or substitutes is recorded as a [`Diagnostic`]
//! and reported as exactly one human-readable line. None of these stop a run.

use crate::klc::charnames::describe_codepoint;
use serde::Serialize;
use std::fmt;

/// A recoverable anomaly found while converting a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An output with more than one character was replaced by the placeholder.
    LigatureReplaced {
        /// The source text of the output attribute
        source: String,
        /// The codepoint inserted instead
        placeholder: String,
    },
    /// A Windows key has no macOS key code in the translation table.
    NoSourceEquivalent {
        /// Windows scan code
        scancode: u8,
        /// Windows virtual key name
        virtual_key: String,
    },
    /// The layout does not define the macOS key a Windows key maps to.
    MissingSourceKey {
        /// Windows scan code
        scancode: u8,
        /// Windows virtual key name
        virtual_key: String,
        /// macOS key code looked up
        mac_key_code: u16,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LigatureReplaced {
                source,
                placeholder,
            } => write!(
                f,
                "Could not convert composed character {}, inserting replacement character ({}). Sorry.",
                source,
                describe_codepoint(placeholder)
            ),
            Self::NoSourceEquivalent {
                scancode,
                virtual_key,
            } => write!(
                f,
                "// No equivalent macOS code for Windows code {} ('{}'). Skipping.",
                scancode, virtual_key
            ),
            Self::MissingSourceKey {
                scancode,
                virtual_key,
                mac_key_code,
            } => write!(
                f,
                "// Could not match Windows code {} ('{}') to Mac OS code {}. Skipping.",
                scancode, virtual_key, mac_key_code
            ),
        }
    }
}
