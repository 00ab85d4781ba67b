//! Canonical modifier classification.
//!
//! Source layouts declare modifier-state slots in any order and with any
//! combination of required and optional flags. Each slot is matched against a
//! fixed rule table: a slot qualifies for a label when its flag set contains
//! the rule's minimal set and is contained in the rule's maximal set.

use crate::models::{ModifierLabel, ModifierSlot, ModifierStateAssignment};

/// A classification rule for one canonical label.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    /// Label assigned when the rule matches
    pub label: ModifierLabel,
    /// Flags that must all be present
    pub minimal: &'static [&'static str],
    /// Flags that may be present
    pub maximal: &'static [&'static str],
}

impl ClassificationRule {
    /// Returns true if `minimal ⊆ slot.flags ⊆ maximal`.
    #[must_use]
    pub fn matches(&self, slot: &ModifierSlot) -> bool {
        self.minimal.iter().all(|flag| slot.flags.contains(*flag))
            && slot
                .flags
                .iter()
                .all(|flag| self.maximal.contains(&flag.as_str()))
    }
}

/// Rules in evaluation order.
pub const RULES: [ClassificationRule; 8] = [
    ClassificationRule {
        label: ModifierLabel::Default,
        minimal: &[],
        maximal: &["command?", "caps?"],
    },
    ClassificationRule {
        label: ModifierLabel::Shift,
        minimal: &["anyShift"],
        maximal: &["anyShift", "caps?", "command?"],
    },
    ClassificationRule {
        label: ModifierLabel::Alt,
        minimal: &["anyOption"],
        maximal: &["anyOption", "caps?", "command?"],
    },
    ClassificationRule {
        label: ModifierLabel::AltShift,
        minimal: &["anyShift", "anyOption"],
        maximal: &["anyShift", "anyOption", "caps?", "command?"],
    },
    ClassificationRule {
        label: ModifierLabel::Cmd,
        minimal: &["command"],
        maximal: &["command", "caps?", "anyShift?", "anyOption?"],
    },
    ClassificationRule {
        label: ModifierLabel::Caps,
        minimal: &["caps"],
        maximal: &["caps", "anyShift?", "command?"],
    },
    ClassificationRule {
        label: ModifierLabel::CmdCaps,
        minimal: &["command", "caps"],
        maximal: &["command", "caps", "anyShift?"],
    },
    ClassificationRule {
        label: ModifierLabel::ShiftCaps,
        minimal: &["anyShift", "caps"],
        maximal: &["anyShift", "caps", "anyOption?"],
    },
];

/// Maps every slot that matches a rule onto its canonical label.
///
/// Slots are visited in order and every rule is tried for every slot, so a
/// later match overwrites an earlier one. Slots that match nothing are
/// skipped.
#[must_use]
pub fn classify(slots: &[ModifierSlot]) -> ModifierStateAssignment {
    let mut assignment = ModifierStateAssignment::new();

    for slot in slots {
        let mut matched = false;
        for rule in &RULES {
            if rule.matches(slot) {
                tracing::debug!(
                    label = %rule.label,
                    keymap_index = slot.keymap_index,
                    "modifier slot classified"
                );
                assignment.assign(rule.label, slot.keymap_index);
                matched = true;
            }
        }
        if !matched {
            tracing::debug!(
                keymap_index = slot.keymap_index,
                flags = ?slot.flags,
                "modifier slot matches no canonical label"
            );
        }
    }

    assignment
}
