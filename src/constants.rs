//! Application-wide constants.
//!
//! This module defines the binary name and the special codepoint
//! values shared by the parser, the resolver and the KLC writer.

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "keylayout-klc";

/// Codepoint of the space character, the marker of the dead-key convention.
pub const SPACE_CODEPOINT: &str = "0020";

/// Codepoint substituted for outputs with more than one character.
pub const PLACEHOLDER_CODEPOINT: &str = "007e";

/// The composition state meaning "no pending dead key".
pub const STATE_NONE: &str = "none";

/// KLC spelling of an output that is not defined.
pub const NOT_DEFINED: &str = "-1";

/// KLC suffix that marks an output as a dead key.
pub const DEAD_KEY_MARKER: char = '@';

/// File suffix accepted as conversion input.
pub const KEYLAYOUT_EXTENSION: &str = "keylayout";
