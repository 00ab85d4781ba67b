//! `.keylayout` document parsing.
//!
//! This module extracts the modifier slots, keys and actions of a macOS
//! keyboard layout into plain records. The raw text is normalised by
//! [`super::prefilter`] first, so every `output` attribute already holds a
//! codepoint string when the tree is walked.

use crate::constants::{APP_BINARY_NAME, KEYLAYOUT_EXTENSION};
use crate::diagnostics::Diagnostic;
use crate::models::{
    ActionDefinition, ActionKind, KeyDefinition, KeyKind, ModifierSlot, SourceLayout,
};
use crate::parser::prefilter::{decode_source, filter_keylayout};
use anyhow::{Context, Result};
use roxmltree::{Document, Node, ParsingOptions};
use std::path::Path;
use std::str::FromStr;

/// A parsed source layout together with the pre-filter's diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKeylayout {
    /// Extracted records
    pub layout: SourceLayout,
    /// Substitutions made while normalising outputs
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses a `.keylayout` file from disk.
///
/// # Errors
///
/// Returns errors for:
/// - File not found or not a regular file
/// - Undecodable bytes (neither UTF-8 nor BOM-marked UTF-16)
/// - Malformed XML
/// - Missing or non-numeric `code`, `index`, `mapIndex` attributes
pub fn parse_keylayout_file(path: &Path, placeholder: &str) -> Result<ParsedKeylayout> {
    if !path.exists() {
        anyhow::bail!(
            "Keyboard layout file not found: {}\n\n\
             Please check the file path and try again.\n\
             Usage: {} convert <FILE>.{}",
            path.display(),
            APP_BINARY_NAME,
            KEYLAYOUT_EXTENSION
        );
    }

    if !path.is_file() {
        anyhow::bail!(
            "Path is not a file: {}\n\n\
            Please provide a path to a .{} file.",
            path.display(),
            KEYLAYOUT_EXTENSION
        );
    }

    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read keyboard layout: {}", path.display()))?;
    let raw = decode_source(&bytes)
        .with_context(|| format!("Failed to decode keyboard layout: {}", path.display()))?;

    parse_keylayout_str(&raw, placeholder)
        .with_context(|| format!("Failed to parse keyboard layout: {}", path.display()))
}

/// Filters and parses the text of a `.keylayout` document.
pub fn parse_keylayout_str(raw: &str, placeholder: &str) -> Result<ParsedKeylayout> {
    let filtered = filter_keylayout(raw, placeholder);
    let layout = extract_layout(&filtered.xml)?;

    tracing::debug!(
        slots = layout.modifier_slots.len(),
        keys = layout.keys.len(),
        actions = layout.actions.len(),
        "extracted keyboard layout"
    );

    Ok(ParsedKeylayout {
        layout,
        diagnostics: filtered.diagnostics,
    })
}

/// Walks an already-filtered XML document in document order.
pub fn extract_layout(xml: &str) -> Result<SourceLayout> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options).context("Invalid XML document")?;

    let mut layout = SourceLayout::default();

    for node in doc.descendants().filter(Node::is_element) {
        match node.tag_name().name() {
            "keyboard" => {
                layout.name = node.attribute("name").map(str::to_string);
            }
            "keyMapSelect" => {
                let map_index: u32 = parse_number(&doc, node, "mapIndex")?;
                for modifier in node.children().filter(Node::is_element) {
                    let keys = modifier.attribute("keys").unwrap_or_default();
                    layout
                        .modifier_slots
                        .push(ModifierSlot::from_keys(map_index, keys));
                }
            }
            "keyMapSet" => {
                let set_id = required_attribute(&doc, node, "id")?;
                for keymap in node.children().filter(Node::is_element) {
                    let keymap_index: u32 = parse_number(&doc, keymap, "index")?;
                    for key in keymap.children().filter(Node::is_element) {
                        layout
                            .keys
                            .push(extract_key(&doc, key, set_id, keymap_index)?);
                    }
                }
            }
            "actions" => {
                for action in node.children().filter(Node::is_element) {
                    let action_id = required_attribute(&doc, action, "id")?;
                    for when in action.children().filter(Node::is_element) {
                        layout.actions.push(extract_when(&doc, when, action_id)?);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(layout)
}

fn extract_key(
    doc: &Document<'_>,
    key: Node<'_, '_>,
    set_id: &str,
    keymap_index: u32,
) -> Result<KeyDefinition> {
    let key_code: u16 = parse_number(doc, key, "code")?;
    let (kind, result) = match key.attribute("action") {
        Some(action_id) => (KeyKind::Action, Some(action_id)),
        None => (KeyKind::Output, key.attribute("output")),
    };

    Ok(KeyDefinition {
        keymap_set_id: set_id.to_string(),
        keymap_index,
        key_code,
        kind,
        result: result.map(str::to_string),
    })
}

fn extract_when(
    doc: &Document<'_>,
    when: Node<'_, '_>,
    action_id: &str,
) -> Result<ActionDefinition> {
    let state = required_attribute(doc, when, "state")?;
    let (kind, result) = match when.attribute("next") {
        Some(target) => (ActionKind::Next, Some(target)),
        None => (ActionKind::Output, when.attribute("output")),
    };

    Ok(ActionDefinition {
        action_id: action_id.to_string(),
        state: state.to_string(),
        kind,
        result: result.map(str::to_string),
    })
}

fn required_attribute<'a>(doc: &Document<'_>, node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    node.attribute(name).with_context(|| {
        let pos = doc.text_pos_at(node.range().start);
        format!(
            "<{}> at line {} is missing the '{}' attribute",
            node.tag_name().name(),
            pos.row,
            name
        )
    })
}

fn parse_number<T: FromStr>(doc: &Document<'_>, node: Node<'_, '_>, name: &str) -> Result<T> {
    let value = required_attribute(doc, node, name)?;
    value.trim().parse().ok().with_context(|| {
        let pos = doc.text_pos_at(node.range().start);
        format!(
            "<{}> at line {} has a non-numeric '{}' attribute: {}",
            node.tag_name().name(),
            pos.row,
            name,
            value
        )
    })
}
