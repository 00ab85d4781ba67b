//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution. The configuration
//! carries the KLC metadata that a `.keylayout` file does not provide.

use crate::constants::PLACEHOLDER_CODEPOINT;
use crate::klc::charnames::parse_codepoint;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Metadata written into the KLC header and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Company name for the COPYRIGHT and COMPANY lines
    pub company: String,
    /// Short locale tag (e.g. "us")
    pub locale_tag: String,
    /// BCP 47 locale name (e.g. "en-US")
    pub locale_name: String,
    /// Human-readable language name (e.g. "English (United States)")
    pub locale_name_long: String,
    /// Windows locale id as four hex digits (e.g. "0409")
    pub locale_id: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            company: "myCompany".to_string(),
            locale_tag: "us".to_string(),
            locale_name: "en-US".to_string(),
            locale_name_long: "English (United States)".to_string(),
            locale_id: "0409".to_string(),
        }
    }
}

impl MetadataConfig {
    /// The eight-digit locale id used by the LOCALEID line (e.g. "00000409").
    #[must_use]
    pub fn locale_id_long(&self) -> String {
        format!("{:0>8}", self.locale_id)
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Codepoint substituted for ligature outputs
    pub placeholder: String,
    /// Default output directory (the input file's directory when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER_CODEPOINT.to_string(),
            directory: None,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/keylayout-klc/config.toml`
/// - macOS: `~/Library/Application Support/keylayout-klc/config.toml`
/// - Windows: `%APPDATA%\keylayout-klc\config.toml`
///
/// # Validation
///
/// - `locale_id` must be four hexadecimal digits
/// - text fields must not contain double quotes (KLC strings are quoted)
/// - `placeholder` must be a 4 or 5 digit codepoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// KLC metadata
    pub metadata: MetadataConfig,
    /// Output settings
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("keylayout-klc");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from a path, or defaults if the file doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        Self::load_from(path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves configuration to a path using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let metadata = &self.metadata;

        if metadata.locale_id.len() != 4
            || !metadata.locale_id.chars().all(|c| c.is_ascii_hexdigit())
        {
            anyhow::bail!(
                "locale_id must be four hexadecimal digits, got '{}'",
                metadata.locale_id
            );
        }

        for (field, value) in [
            ("company", &metadata.company),
            ("locale_tag", &metadata.locale_tag),
            ("locale_name", &metadata.locale_name),
            ("locale_name_long", &metadata.locale_name_long),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("{field} must not be empty");
            }
            if value.contains('"') {
                anyhow::bail!("{field} must not contain double quotes: {value}");
            }
        }

        let placeholder = &self.output.placeholder;
        if !(4..=5).contains(&placeholder.len()) || parse_codepoint(placeholder).is_none() {
            anyhow::bail!("placeholder must be a 4 or 5 digit codepoint, got '{placeholder}'");
        }

        Ok(())
    }
}
