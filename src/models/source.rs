//! The extracted contents of a source keyboard layout.

use crate::models::{ActionDefinition, KeyDefinition, ModifierSlot};
use serde::{Deserialize, Serialize};

/// Plain records extracted from a `.keylayout` tree, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLayout {
    /// Value of the `name` attribute of `<keyboard>`, if present
    pub name: Option<String>,
    /// Modifier-state slots from every `<keyMapSelect>`
    pub modifier_slots: Vec<ModifierSlot>,
    /// Keys from every `<keyMapSet>`
    pub keys: Vec<KeyDefinition>,
    /// Entries from every `<action>`
    pub actions: Vec<ActionDefinition>,
}

impl SourceLayout {
    /// Id of the first keymap set that declares keys, the only one converted.
    #[must_use]
    pub fn first_keymap_set(&self) -> Option<&str> {
        self.keys.first().map(|key| key.keymap_set_id.as_str())
    }
}
