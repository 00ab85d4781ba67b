//! Modifier-state slots and their canonical classification.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// One of the eight canonical modifier combinations a source slot can map to.
///
/// The declaration order is the order in which the classifier evaluates the
/// labels, which matters because later matches overwrite earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierLabel {
    /// No modifier (command and caps lock optional)
    Default,
    /// Any shift key
    Shift,
    /// Any option key
    Alt,
    /// Shift and option together
    AltShift,
    /// Command key
    Cmd,
    /// Caps lock
    Caps,
    /// Command with caps lock
    CmdCaps,
    /// Shift with caps lock
    ShiftCaps,
}

impl ModifierLabel {
    /// All labels in classification order.
    pub const ALL: [Self; 8] = [
        Self::Default,
        Self::Shift,
        Self::Alt,
        Self::AltShift,
        Self::Cmd,
        Self::Caps,
        Self::CmdCaps,
        Self::ShiftCaps,
    ];

    /// Returns the lowercase label name (e.g. "altshift").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Shift => "shift",
            Self::Alt => "alt",
            Self::AltShift => "altshift",
            Self::Cmd => "cmd",
            Self::Caps => "caps",
            Self::CmdCaps => "cmdcaps",
            Self::ShiftCaps => "shiftcaps",
        }
    }

    /// Position of this label in [`ModifierLabel::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ModifierLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A modifier-state slot declared by the source layout.
///
/// Each `<modifier keys="...">` element inside a `<keyMapSelect>` becomes one
/// slot. Flags are kept verbatim, so `caps` and `caps?` stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierSlot {
    /// Keymap index selected by this slot (`mapIndex`)
    pub keymap_index: u32,
    /// Active modifier flags (e.g. "anyShift", "caps?")
    pub flags: BTreeSet<String>,
}

impl ModifierSlot {
    /// Creates a slot from a whitespace-separated `keys` attribute.
    pub fn from_keys(keymap_index: u32, keys: &str) -> Self {
        Self {
            keymap_index,
            flags: keys.split_whitespace().map(str::to_string).collect(),
        }
    }
}

/// Mapping from canonical label to the source keymap index that claims it.
///
/// Labels without an assignment read as "not defined" downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierStateAssignment {
    assignments: BTreeMap<ModifierLabel, u32>,
}

impl ModifierStateAssignment {
    /// Creates an empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a label to a keymap index, replacing any previous assignment.
    pub fn assign(&mut self, label: ModifierLabel, keymap_index: u32) {
        self.assignments.insert(label, keymap_index);
    }

    /// Returns the keymap index assigned to a label.
    #[must_use]
    pub fn index_for(&self, label: ModifierLabel) -> Option<u32> {
        self.assignments.get(&label).copied()
    }

    /// Number of labels with an assignment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns true if no label is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterates over assigned labels in classification order.
    pub fn iter(&self) -> impl Iterator<Item = (ModifierLabel, u32)> + '_ {
        self.assignments.iter().map(|(label, index)| (*label, *index))
    }
}
