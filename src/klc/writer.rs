//! KLC document rendering.
//!
//! Produces the lines of a Microsoft Keyboard Layout Creator source file from
//! a [`ResolvedLayout`]. Columns are tab separated; line endings and encoding
//! are applied by [`super::encoding`].

use crate::config::MetadataConfig;
use crate::klc::charnames::{char_from_codepoint, describe_codepoint};
use crate::klc::keycodes::{KEY_NAMES, KEY_NAMES_EXT};
use crate::models::{CapsMode, KeyRow, ModifierLabel};
use crate::resolver::ResolvedLayout;
use chrono::Datelike;

/// Shift states written to the `SHIFTSTATE` section, with their column notes.
const SHIFT_STATES: [(u8, &str); 6] = [
    (0, "//Column 4"),
    (1, "//Column 5 : Shft"),
    (2, "//Column 6 :       Ctrl"),
    (3, "//Column 7 : Shft  Ctrl"),
    (6, "//Column 8 :       Ctrl Alt"),
    (7, "//Column 9 : Shft  Ctrl Alt"),
];

/// Output columns of a key row, in `SHIFTSTATE` order.
const ROW_COLUMNS: [ModifierLabel; 6] = [
    ModifierLabel::Default,
    ModifierLabel::Shift,
    ModifierLabel::Cmd,
    ModifierLabel::CmdCaps,
    ModifierLabel::Alt,
    ModifierLabel::AltShift,
];

/// Labels described in a key row's trailing comment.
const DESCRIBED_COLUMNS: [ModifierLabel; 5] = [
    ModifierLabel::Default,
    ModifierLabel::Shift,
    ModifierLabel::Cmd,
    ModifierLabel::Alt,
    ModifierLabel::AltShift,
];

/// Renders KLC documents for one keyboard.
#[derive(Debug, Clone)]
pub struct KlcWriter<'a> {
    metadata: &'a MetadataConfig,
    keyboard_name: &'a str,
    kbd_identifier: &'a str,
    year: i32,
}

impl<'a> KlcWriter<'a> {
    /// Creates a writer stamped with the current year.
    ///
    /// # Arguments
    ///
    /// * `metadata` - Company and locale settings
    /// * `keyboard_name` - Human-readable name (the input file stem)
    /// * `kbd_identifier` - Eight-character identifier (the KLC file stem)
    #[must_use]
    pub fn new(
        metadata: &'a MetadataConfig,
        keyboard_name: &'a str,
        kbd_identifier: &'a str,
    ) -> Self {
        Self {
            metadata,
            keyboard_name,
            kbd_identifier,
            year: chrono::Local::now().year(),
        }
    }

    /// Overrides the copyright year.
    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Renders the complete document.
    #[must_use]
    pub fn render(&self, layout: &ResolvedLayout) -> Vec<String> {
        let mut lines = self.prefix();
        lines.extend(key_table(&layout.rows));
        lines.extend(dead_key_tables(layout));
        lines.extend(key_names());
        lines.extend(dead_key_names(layout));
        lines.extend(self.suffix());
        lines
    }

    /// Header up to and including the `LAYOUT` column legend.
    #[must_use]
    pub fn prefix(&self) -> Vec<String> {
        let meta = self.metadata;
        let mut lines = vec![
            format!(
                "KBD\t{}\t\"{} - {}\"",
                self.kbd_identifier, self.keyboard_name, meta.locale_tag
            ),
            String::new(),
            format!("COPYRIGHT\t\"(c) {} {}\"", self.year, meta.company),
            String::new(),
            format!("COMPANY\t\"{}\"", meta.company),
            String::new(),
            format!("LOCALENAME\t\"{}\"", meta.locale_name),
            String::new(),
            format!("LOCALEID\t\"{}\"", meta.locale_id_long()),
            String::new(),
            "VERSION\t1.0".to_string(),
            String::new(),
            "SHIFTSTATE".to_string(),
            String::new(),
        ];
        lines.extend(
            SHIFT_STATES
                .iter()
                .map(|(state, note)| format!("{state}\t{note}")),
        );
        lines.extend([
            String::new(),
            "LAYOUT\t\t;an extra '@' at the end is a dead key".to_string(),
            String::new(),
            "//SC\tVK_\t\tCap\t0\t1\t2\t3\t6\t7".to_string(),
            "//--\t----\t\t----\t----\t----\t----\t----\t----\t----".to_string(),
            String::new(),
        ]);
        lines
    }

    /// Descriptions, language names and the closing keyword.
    #[must_use]
    pub fn suffix(&self) -> Vec<String> {
        let meta = self.metadata;
        vec![
            "DESCRIPTIONS".to_string(),
            String::new(),
            format!("{}\t{}", meta.locale_id, self.keyboard_name),
            String::new(),
            "LANGUAGENAMES".to_string(),
            String::new(),
            format!("{}\t{}", meta.locale_id, meta.locale_name_long),
            String::new(),
            "ENDKBD".to_string(),
        ]
    }
}

/// One line per key row, plus a second line for every `SGCap` key.
#[must_use]
pub fn key_table(rows: &[KeyRow]) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len());

    for row in rows {
        let mut columns = vec![
            format!("{:02x}", row.scancode),
            row.virtual_key.clone(),
            String::new(),
            row.caps.to_string(),
        ];
        columns.extend(
            ROW_COLUMNS
                .iter()
                .map(|label| row.outputs.get(*label).to_string()),
        );
        let descriptions: Vec<String> = DESCRIBED_COLUMNS
            .iter()
            .map(|label| describe_codepoint(&row.outputs.get(*label).to_string()))
            .collect();
        columns.push(format!("// {}", descriptions.join(", ")));
        lines.push(columns.join("\t"));

        if row.caps == CapsMode::SgCap {
            let caps = row.outputs.get(ModifierLabel::Caps).to_string();
            let shift_caps = row.outputs.get(ModifierLabel::ShiftCaps).to_string();
            lines.push(format!(
                "-1\t-1\t\t0\t{}\t{}\t\t\t\t\t// {}, {}",
                caps,
                shift_caps,
                describe_codepoint(&caps),
                describe_codepoint(&shift_caps)
            ));
        }
    }

    lines
}

/// A `DEADKEY` block for every dead key with compositions.
#[must_use]
pub fn dead_key_tables(layout: &ResolvedLayout) -> Vec<String> {
    let mut lines = vec![String::new()];

    for (glyph, pairs) in &layout.compositions {
        lines.push(String::new());
        lines.push(format!("DEADKEY\t{glyph}"));
        lines.push(String::new());
        for (base, composed) in pairs {
            lines.push(format!(
                "{}\t{}\t// {} -> {}",
                base,
                composed,
                char_from_codepoint(base),
                char_from_codepoint(composed)
            ));
        }
    }

    lines
}

/// The fixed `KEYNAME` and `KEYNAME_EXT` sections.
#[must_use]
pub fn key_names() -> Vec<String> {
    let mut lines = Vec::new();
    for (section, names) in [("KEYNAME", KEY_NAMES), ("KEYNAME_EXT", KEY_NAMES_EXT)] {
        lines.push(String::new());
        lines.push(section.to_string());
        lines.push(String::new());
        lines.extend(
            names
                .iter()
                .map(|(scancode, name)| format!("{scancode:02x}\t{}", quote_key_name(name))),
        );
    }
    lines
}

/// The `KEYNAME_DEAD` section, or two blank lines when there are no dead keys.
#[must_use]
pub fn dead_key_names(layout: &ResolvedLayout) -> Vec<String> {
    if layout.actions.dead_keys.is_empty() {
        return vec![String::new(), String::new()];
    }

    let mut lines = vec![String::new(), "KEYNAME_DEAD".to_string(), String::new()];
    lines.extend(
        layout
            .actions
            .dead_keys
            .values()
            .map(|glyph| format!("{}\t\"{}\"", glyph, describe_codepoint(glyph))),
    );
    lines.push(String::new());
    lines
}

fn quote_key_name(name: &str) -> String {
    if name.contains(' ') {
        format!("\"{name}\"")
    } else {
        name.to_string()
    }
}
