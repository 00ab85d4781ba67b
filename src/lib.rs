//! keylayout-klc Library
//!
//! This library converts macOS `.keylayout` keyboard layouts into Microsoft
//! Keyboard Layout Creator (`.klc`) sources: parsing the XML, resolving
//! modifier states and dead keys, and rendering the KLC document.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod klc;
pub mod models;
pub mod parser;
pub mod resolver;
pub mod services;
