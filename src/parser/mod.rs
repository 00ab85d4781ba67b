//! Reading macOS `.keylayout` files.
//!
//! Parsing happens in two passes: [`prefilter`] rewrites the raw text into
//! XML 1.0 with normalised output attributes, and [`keylayout`] walks the
//! resulting tree into plain records.

pub mod keylayout;
pub mod prefilter;

// Re-export commonly used functions
pub use keylayout::{parse_keylayout_file, parse_keylayout_str, ParsedKeylayout};
pub use prefilter::filter_keylayout;
