//! Composition actions and their resolved form.

use crate::constants::{SPACE_CODEPOINT, STATE_NONE};
use serde::{Deserialize, Serialize};

/// What an action entry does when invoked in its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Terminates the sequence and yields a codepoint
    Output,
    /// Moves the composition state machine to another state
    Next,
}

/// One `<when>` entry of an `<action>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDefinition {
    /// Id of the owning `<action>`
    pub action_id: String,
    /// Composition state this entry applies to ("none" or a state name)
    pub state: String,
    /// Output or state transition
    pub kind: ActionKind,
    /// Codepoint for `Output`, target state for `Next`
    pub result: Option<String>,
}

impl ActionDefinition {
    /// Creates an entry that outputs a codepoint.
    pub fn output(
        action_id: impl Into<String>,
        state: impl Into<String>,
        codepoint: impl Into<String>,
    ) -> Self {
        Self {
            action_id: action_id.into(),
            state: state.into(),
            kind: ActionKind::Output,
            result: Some(codepoint.into()),
        }
    }

    /// Creates an entry that moves to another state.
    pub fn next(
        action_id: impl Into<String>,
        state: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            action_id: action_id.into(),
            state: state.into(),
            kind: ActionKind::Next,
            result: Some(target.into()),
        }
    }

    /// True for entries in the `none` state.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state == STATE_NONE
    }

    /// True for the `none`-state output entries that define base characters.
    #[must_use]
    pub fn is_base_output(&self) -> bool {
        self.is_idle() && self.kind == ActionKind::Output
    }

    /// True for `none`-state entries that only switch state (dead keys).
    #[must_use]
    pub fn is_idle_transition(&self) -> bool {
        self.is_idle() && self.kind == ActionKind::Next
    }

    /// True if the result is the space codepoint.
    #[must_use]
    pub fn yields_space(&self) -> bool {
        self.result.as_deref() == Some(SPACE_CODEPOINT)
    }
}

/// An action entry extended with the base character of its action id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAction {
    /// The source entry
    #[serde(flatten)]
    pub action: ActionDefinition,
    /// Character the action id produces with no composition pending
    pub base: Option<String>,
}
