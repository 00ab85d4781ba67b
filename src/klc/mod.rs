//! Microsoft Keyboard Layout Creator (`.klc`) output.
//!
//! - [`keycodes`]: Windows key tables
//! - [`naming`]: 8.3 file names
//! - [`writer`]: document lines
//! - [`encoding`]: UTF-16 LE + CRLF file output
//! - [`charnames`]: codepoint helpers shared with the parser

pub mod charnames;
pub mod encoding;
pub mod keycodes;
pub mod naming;
pub mod writer;

pub use encoding::write_klc_file;
pub use naming::{kbd_identifier, keyboard_name, klc_filename};
pub use writer::KlcWriter;
