//! Per-key output table and destination key rows.

use crate::diagnostics::Diagnostic;
use crate::klc::keycodes::WINDOWS_KEYS;
use crate::models::{
    KeyDefinition, KeyKind, KeyOutput, KeyRow, ModifierStateAssignment, OutputTable, SourceLayout,
};
use crate::resolver::actions::ActionResolution;

/// Output of a single key definition after action resolution.
///
/// Keys referring to a dead-key action become [`KeyOutput::DeadKey`], keys
/// referring to an action with a base character output that character, and
/// anything unresolved reads as not defined.
#[must_use]
pub fn resolve_key_output(key: &KeyDefinition, resolution: &ActionResolution) -> KeyOutput {
    let Some(result) = key.result.as_deref().filter(|r| !r.is_empty()) else {
        return KeyOutput::NotDefined;
    };

    match key.kind {
        KeyKind::Output => KeyOutput::Char(result.to_string()),
        KeyKind::Action => match resolution.base_for(result) {
            Some(base) if resolution.is_empty_action(result) => {
                KeyOutput::DeadKey(base.to_string())
            }
            Some(base) => KeyOutput::Char(base.to_string()),
            None => {
                tracing::debug!(
                    key_code = key.key_code,
                    action_id = result,
                    "key action has no base character"
                );
                KeyOutput::NotDefined
            }
        },
    }
}

/// Builds the output table from the keys of the first keymap set.
///
/// Keys of any later keymap set are ignored. When the same key code and
/// keymap index appear twice, the later definition wins.
#[must_use]
pub fn build_output_table(layout: &SourceLayout, resolution: &ActionResolution) -> OutputTable {
    let mut table = OutputTable::new();
    let Some(first_set) = layout.first_keymap_set() else {
        return table;
    };

    for key in layout
        .keys
        .iter()
        .filter(|key| key.keymap_set_id == first_set)
    {
        table.insert(
            key.key_code,
            key.keymap_index,
            resolve_key_output(key, resolution),
        );
    }

    tracing::debug!(keymap_set = first_set, keys = table.len(), "built output table");
    table
}

/// Walks the Windows key list and reads each key's outputs from the table.
///
/// Returns the rows in scan code order, plus one diagnostic for every Windows
/// key that was skipped.
#[must_use]
pub fn build_key_rows(
    table: &OutputTable,
    assignment: &ModifierStateAssignment,
) -> (Vec<KeyRow>, Vec<Diagnostic>) {
    let mut rows = Vec::new();
    let mut diagnostics = Vec::new();

    for key in WINDOWS_KEYS {
        let Some(mac_key_code) = key.mac_key_code else {
            diagnostics.push(Diagnostic::NoSourceEquivalent {
                scancode: key.scancode,
                virtual_key: key.virtual_key.to_string(),
            });
            continue;
        };

        let Some(outputs) = table.outputs_for(mac_key_code, assignment) else {
            diagnostics.push(Diagnostic::MissingSourceKey {
                scancode: key.scancode,
                virtual_key: key.virtual_key.to_string(),
                mac_key_code,
            });
            continue;
        };

        rows.push(KeyRow {
            scancode: key.scancode,
            virtual_key: key.virtual_key.to_string(),
            mac_key_code,
            caps: outputs.caps_mode(),
            outputs,
        });
    }

    (rows, diagnostics)
}
