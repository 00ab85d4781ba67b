//! Resolved key outputs and the tables built from them.

use crate::constants::{DEAD_KEY_MARKER, NOT_DEFINED};
use crate::models::modifier::{ModifierLabel, ModifierStateAssignment};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Output of one key in one modifier state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeyOutput {
    /// A plain codepoint (e.g. "0061")
    Char(String),
    /// A dead key showing this codepoint (rendered with a trailing `@`)
    DeadKey(String),
    /// Nothing is produced (rendered as `-1`)
    #[default]
    NotDefined,
}

impl fmt::Display for KeyOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(cp) => f.write_str(cp),
            Self::DeadKey(cp) => write!(f, "{cp}{DEAD_KEY_MARKER}"),
            Self::NotDefined => f.write_str(NOT_DEFINED),
        }
    }
}

impl Serialize for KeyOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outputs of every key of the first keymap set, by key code and keymap index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputTable {
    keys: BTreeMap<u16, BTreeMap<u32, KeyOutput>>,
}

impl OutputTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output of a key in one keymap index; later inserts win.
    pub fn insert(&mut self, key_code: u16, keymap_index: u32, output: KeyOutput) {
        self.keys
            .entry(key_code)
            .or_default()
            .insert(keymap_index, output);
    }

    /// Returns true if the source layout defines this key code at all.
    #[must_use]
    pub fn contains_key(&self, key_code: u16) -> bool {
        self.keys.contains_key(&key_code)
    }

    /// Output of a key in one keymap index, or `NotDefined`.
    #[must_use]
    pub fn get(&self, key_code: u16, keymap_index: u32) -> KeyOutput {
        self.keys
            .get(&key_code)
            .and_then(|states| states.get(&keymap_index))
            .cloned()
            .unwrap_or_default()
    }

    /// Outputs of a key for all eight canonical labels.
    ///
    /// Returns `None` if the key code is absent from the table. Labels without
    /// an assigned keymap index read as `NotDefined`.
    #[must_use]
    pub fn outputs_for(
        &self,
        key_code: u16,
        assignment: &ModifierStateAssignment,
    ) -> Option<KeyOutputs> {
        if !self.contains_key(key_code) {
            return None;
        }

        let mut outputs = KeyOutputs::default();
        for label in ModifierLabel::ALL {
            if let Some(index) = assignment.index_for(label) {
                outputs.set(label, self.get(key_code, index));
            }
        }
        Some(outputs)
    }

    /// Number of distinct key codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the table has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// The eight labelled outputs of one key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutputs {
    outputs: [KeyOutput; 8],
}

impl KeyOutputs {
    /// Output for a canonical label.
    #[must_use]
    pub fn get(&self, label: ModifierLabel) -> &KeyOutput {
        &self.outputs[label.index()]
    }

    /// Sets the output for a canonical label.
    pub fn set(&mut self, label: ModifierLabel, output: KeyOutput) {
        self.outputs[label.index()] = output;
    }

    /// Classifies caps lock behaviour against the default and shift outputs.
    #[must_use]
    pub fn caps_mode(&self) -> CapsMode {
        let caps = self.get(ModifierLabel::Caps);
        if caps == self.get(ModifierLabel::Default) {
            CapsMode::Off
        } else if caps == self.get(ModifierLabel::Shift) {
            CapsMode::On
        } else {
            CapsMode::SgCap
        }
    }
}

impl Serialize for KeyOutputs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            ModifierLabel::ALL
                .iter()
                .map(|label| (label.as_str(), self.get(*label))),
        )
    }
}

/// Caps lock behaviour of a key in the destination format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapsMode {
    /// Caps lock has no effect (`0`)
    Off,
    /// Caps lock acts like shift (`1`)
    On,
    /// Caps lock yields its own glyphs and needs a second row (`SGCap`)
    SgCap,
}

impl CapsMode {
    /// KLC spelling of the flag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "0",
            Self::On => "1",
            Self::SgCap => "SGCap",
        }
    }
}

impl fmt::Display for CapsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CapsMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One row of the destination key table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyRow {
    /// Windows scan code
    pub scancode: u8,
    /// Windows virtual key name (e.g. "OEM_MINUS")
    pub virtual_key: String,
    /// macOS key code the row was read from
    pub mac_key_code: u16,
    /// Caps lock flag
    pub caps: CapsMode,
    /// Outputs by canonical label
    pub outputs: KeyOutputs,
}
