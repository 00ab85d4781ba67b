//! Service layer for business logic.
//!
//! This module contains services that coordinate the parser, the resolver
//! and the KLC writer.

pub mod layouts;

// Re-export commonly used types and functions
pub use layouts::{Conversion, LayoutService, LoadedLayout};
