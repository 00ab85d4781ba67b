//! Dead-key and base-character resolution over composition actions.
//!
//! A `.keylayout` expresses dead keys as state machines: a dead key's action
//! switches to a state, and every other action lists what it produces in that
//! state. The space bar's action is the anchor of the convention. Its output
//! in state `none` is `0020`, and its output in any other state is the glyph
//! of the dead key that leads to that state.

use crate::models::{ActionDefinition, ActionKind, ResolvedAction};
use indexmap::IndexMap;
use serde::Serialize;

/// Composition state → dead-key glyph codepoint.
pub type DeadKeyRegistry = IndexMap<String, String>;

/// Action id → character the action produces with no composition pending.
pub type BaseKeyRegistry = IndexMap<String, String>;

/// Everything derived from the action list of one source layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionResolution {
    /// Dead-key glyphs by state, in registration order
    pub dead_keys: DeadKeyRegistry,
    /// Base characters by action id
    pub base_keys: BaseKeyRegistry,
    /// Ids of actions whose `none` entry only switches state, in document order
    pub empty_actions: Vec<String>,
    /// Every action entry with its base character attached
    pub records: Vec<ResolvedAction>,
}

impl ActionResolution {
    /// Returns true if the action only switches state when pressed on its own.
    #[must_use]
    pub fn is_empty_action(&self, action_id: &str) -> bool {
        self.empty_actions.iter().any(|id| id == action_id)
    }

    /// Dead-key glyph reached through a composition state.
    #[must_use]
    pub fn glyph_for_state(&self, state: &str) -> Option<&str> {
        self.dead_keys.get(state).map(String::as_str)
    }

    /// Base character of an action id.
    #[must_use]
    pub fn base_for(&self, action_id: &str) -> Option<&str> {
        self.base_keys.get(action_id).map(String::as_str)
    }
}

/// Resolves the action list of a layout.
///
/// Base characters come from `none`-state outputs first. Dead-key actions are
/// then written over them with the glyph their target state stands for, so a
/// dead-key interpretation always wins.
#[must_use]
pub fn resolve_actions(actions: &[ActionDefinition]) -> ActionResolution {
    let mut resolution = ActionResolution::default();
    let mut candidate: Option<&str> = None;
    let mut transitions: Vec<(&str, &str)> = Vec::new();

    for action in actions {
        if action.is_base_output() && action.yields_space() {
            candidate = Some(action.action_id.as_str());
        }
        if candidate == Some(action.action_id.as_str()) && !action.yields_space() {
            if let Some(glyph) = &action.result {
                resolution
                    .dead_keys
                    .insert(action.state.clone(), glyph.clone());
            }
        }

        if action.is_idle_transition() {
            resolution.empty_actions.push(action.action_id.clone());
            if let Some(target) = action.result.as_deref() {
                transitions.push((action.action_id.as_str(), target));
            }
        }

        if action.is_base_output() {
            if let Some(base) = &action.result {
                resolution
                    .base_keys
                    .insert(action.action_id.clone(), base.clone());
            }
        }
    }

    for (action_id, target) in transitions {
        match resolution.dead_keys.get(target) {
            Some(glyph) => {
                resolution
                    .base_keys
                    .insert(action_id.to_string(), glyph.clone());
            }
            None => {
                tracing::debug!(action_id, target, "dead-key target state has no glyph");
            }
        }
    }

    resolution.records = actions
        .iter()
        .map(|action| ResolvedAction {
            action: action.clone(),
            base: resolution.base_keys.get(&action.action_id).cloned(),
        })
        .collect();

    tracing::debug!(
        dead_keys = resolution.dead_keys.len(),
        base_keys = resolution.base_keys.len(),
        empty_actions = resolution.empty_actions.len(),
        "resolved actions"
    );

    resolution
}

/// Returns true if a resolved record can enter a composition table.
#[must_use]
pub fn is_composable(record: &ResolvedAction) -> bool {
    record.action.kind == ActionKind::Output
        && record.base.is_some()
        && record.action.result.is_some()
}
