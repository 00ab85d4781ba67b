//! Raw key definitions extracted from a source keymap set.

use serde::{Deserialize, Serialize};

/// How a key definition yields its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    /// The result is a codepoint
    Output,
    /// The result is the id of an action
    Action,
}

/// One key in one modifier state of one keymap set.
///
/// `keymap_set_id`, `keymap_index` and `key_code` together identify the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDefinition {
    /// Id of the owning `<keyMapSet>` (e.g. "ANSI")
    pub keymap_set_id: String,
    /// Index of the owning `<keyMap>`, i.e. the modifier state
    pub keymap_index: u32,
    /// macOS virtual key code
    pub key_code: u16,
    /// Whether `result` is a codepoint or an action id
    pub kind: KeyKind,
    /// Codepoint or action id; `None` when the source gives neither
    pub result: Option<String>,
}

impl KeyDefinition {
    /// Creates a key that outputs a codepoint directly.
    pub fn output(
        keymap_set_id: impl Into<String>,
        keymap_index: u32,
        key_code: u16,
        codepoint: impl Into<String>,
    ) -> Self {
        Self {
            keymap_set_id: keymap_set_id.into(),
            keymap_index,
            key_code,
            kind: KeyKind::Output,
            result: Some(codepoint.into()),
        }
    }

    /// Creates a key that refers to an action.
    pub fn action(
        keymap_set_id: impl Into<String>,
        keymap_index: u32,
        key_code: u16,
        action_id: impl Into<String>,
    ) -> Self {
        Self {
            keymap_set_id: keymap_set_id.into(),
            keymap_index,
            key_code,
            kind: KeyKind::Action,
            result: Some(action_id.into()),
        }
    }
}
