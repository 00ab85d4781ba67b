//! Data models for source layouts and resolved tables.
//!
//! This module contains the plain records shared by the parser, the resolver
//! and the KLC writer. Models carry no parsing or formatting logic of their own.

pub mod action;
pub mod key;
pub mod modifier;
pub mod output;
pub mod source;

// Re-export all model types
pub use action::{ActionDefinition, ActionKind, ResolvedAction};
pub use key::{KeyDefinition, KeyKind};
pub use modifier::{ModifierLabel, ModifierSlot, ModifierStateAssignment};
pub use output::{CapsMode, KeyOutput, KeyOutputs, KeyRow, OutputTable};
pub use source::SourceLayout;
