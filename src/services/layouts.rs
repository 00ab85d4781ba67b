//! Layout conversion service.
//!
//! This module centralizes the end-to-end pipeline, providing one interface
//! for loading a `.keylayout` file, resolving it and writing the `.klc` file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::diagnostics::Diagnostic;
use crate::klc::{self, KlcWriter};
use crate::parser::{self, ParsedKeylayout};
use crate::resolver::{self, ResolvedLayout};

/// A resolved layout with every diagnostic collected on the way.
#[derive(Debug, Clone)]
pub struct LoadedLayout {
    /// Keyboard name (the input file stem)
    pub keyboard_name: String,
    /// `name` attribute of the `<keyboard>` element, if any
    pub source_name: Option<String>,
    /// Resolution result
    pub resolved: ResolvedLayout,
    /// Pre-filter diagnostics followed by key table diagnostics
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of a conversion run.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Keyboard name (the input file stem)
    pub keyboard_name: String,
    /// 8.3 file name of the written file
    pub klc_filename: String,
    /// Full path of the written file
    pub output_path: PathBuf,
    /// Every diagnostic, in the order it was found
    pub diagnostics: Vec<Diagnostic>,
}

/// Service for converting layout files.
pub struct LayoutService;

impl LayoutService {
    /// Loads and resolves a `.keylayout` file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the `.keylayout` file
    /// * `config` - Supplies the ligature placeholder
    ///
    /// # Returns
    ///
    /// * `Ok(LoadedLayout)` - Successfully resolved layout
    /// * `Err(...)` - File not found, decode error or malformed XML
    pub fn load(path: &Path, config: &Config) -> Result<LoadedLayout> {
        let ParsedKeylayout {
            layout,
            mut diagnostics,
        } = parser::parse_keylayout_file(path, &config.output.placeholder)
            .with_context(|| format!("Failed to load layout from {}", path.display()))?;

        let keyboard_name = klc::keyboard_name(path)?;
        let resolved = resolver::resolve(&layout);
        diagnostics.extend(resolved.diagnostics.iter().cloned());

        Ok(LoadedLayout {
            keyboard_name,
            source_name: layout.name,
            resolved,
            diagnostics,
        })
    }

    /// Converts a `.keylayout` file into a `.klc` file in `output_dir`.
    ///
    /// The file name is checked before anything is read, so an unusable name
    /// fails without side effects.
    pub fn convert(input: &Path, output_dir: &Path, config: &Config) -> Result<Conversion> {
        let keyboard_name = klc::keyboard_name(input)?;
        let klc_filename = klc::klc_filename(&keyboard_name)?;

        let loaded = Self::load(input, config)?;

        let writer = KlcWriter::new(
            &config.metadata,
            &loaded.keyboard_name,
            klc::kbd_identifier(&klc_filename),
        );
        let lines = writer.render(&loaded.resolved);

        let output_path = output_dir.join(&klc_filename);
        klc::write_klc_file(&output_path, &lines)
            .with_context(|| format!("Failed to save KLC file to {}", output_path.display()))?;

        tracing::info!(
            input = %input.display(),
            output = %output_path.display(),
            lines = lines.len(),
            "converted layout"
        );

        Ok(Conversion {
            keyboard_name: loaded.keyboard_name,
            klc_filename,
            output_path,
            diagnostics: loaded.diagnostics,
        })
    }

    /// Output directory for an input file when none is given: the input's directory.
    pub fn default_output_dir(input: &Path) -> Result<PathBuf> {
        let absolute = std::path::absolute(input)
            .with_context(|| format!("Failed to resolve path: {}", input.display()))?;
        let parent = absolute
            .parent()
            .context("Layout file has no parent directory")?;
        Ok(parent.to_path_buf())
    }
}
