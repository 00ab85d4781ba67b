//! Layout model resolution.
//!
//! Turns the flat records of a [`SourceLayout`] into the tables the KLC
//! writer needs. Each stage is a pure pass over in-memory collections:
//!
//! 1. [`classifier`] maps modifier slots onto eight canonical labels.
//! 2. [`actions`] finds dead keys and the base character of every action.
//! 3. [`output_table`] resolves every key of the first keymap set.
//! 4. [`dead_keys`] groups composed characters by dead key.
//!
//! Resolution never fails; anomalies surface as diagnostics or as "not
//! defined" outputs.

pub mod actions;
pub mod classifier;
pub mod dead_keys;
pub mod output_table;

use crate::diagnostics::Diagnostic;
use crate::models::{KeyRow, ModifierStateAssignment, OutputTable, SourceLayout};
use serde::Serialize;

pub use actions::{resolve_actions, ActionResolution, BaseKeyRegistry, DeadKeyRegistry};
pub use classifier::classify;
pub use dead_keys::{build_composition_table, CompositionTable};
pub use output_table::{build_key_rows, build_output_table};

/// Every table derived from one source layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLayout {
    /// Canonical label → keymap index
    pub assignment: ModifierStateAssignment,
    /// Dead keys, base characters and annotated action records
    pub actions: ActionResolution,
    /// Key code → keymap index → output
    pub outputs: OutputTable,
    /// Dead-key glyph → composed pairs
    pub compositions: CompositionTable,
    /// Destination key rows in scan code order
    pub rows: Vec<KeyRow>,
    /// Keys skipped while building rows
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs every resolution stage over a source layout.
#[must_use]
pub fn resolve(layout: &SourceLayout) -> ResolvedLayout {
    let assignment = classify(&layout.modifier_slots);
    let actions = resolve_actions(&layout.actions);
    let outputs = build_output_table(layout, &actions);
    let compositions = build_composition_table(&actions);
    let (rows, diagnostics) = build_key_rows(&outputs, &assignment);

    tracing::info!(
        rows = rows.len(),
        dead_keys = actions.dead_keys.len(),
        skipped = diagnostics.len(),
        "resolved layout"
    );

    ResolvedLayout {
        assignment,
        actions,
        outputs,
        compositions,
        rows,
        diagnostics,
    }
}
