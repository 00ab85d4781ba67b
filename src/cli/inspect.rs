//! Inspect command: show how a layout resolves without writing a file.

use crate::cli::common::{validate_input, CliError, CliResult};
use crate::config::Config;
use crate::diagnostics::Diagnostic;
use crate::klc::charnames::describe_codepoint;
use crate::models::ModifierLabel;
use crate::resolver::ResolvedLayout;
use crate::services::LayoutService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Show modifier states, dead keys and diagnostics of a layout
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Input .keylayout file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for inspect
#[derive(Debug, Serialize)]
struct InspectResponse<'a> {
    keyboard_name: &'a str,
    source_name: Option<&'a str>,
    layout: &'a ResolvedLayout,
    diagnostics: Vec<DiagnosticData<'a>>,
}

/// Diagnostic with its rendered message
#[derive(Debug, Serialize)]
struct DiagnosticData<'a> {
    #[serde(flatten)]
    diagnostic: &'a Diagnostic,
    message: String,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        validate_input(&self.input)?;

        let loaded = LayoutService::load(&self.input, config)
            .map_err(|e| CliError::io(format!("Failed to load layout: {e:#}")))?;

        if self.json {
            let response = InspectResponse {
                keyboard_name: &loaded.keyboard_name,
                source_name: loaded.source_name.as_deref(),
                layout: &loaded.resolved,
                diagnostics: loaded
                    .diagnostics
                    .iter()
                    .map(|diagnostic| DiagnosticData {
                        diagnostic,
                        message: diagnostic.to_string(),
                    })
                    .collect(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        let layout = &loaded.resolved;
        println!("Keyboard: {}", loaded.keyboard_name);
        if let Some(source_name) = &loaded.source_name {
            println!("Source name: {source_name}");
        }

        println!("\nModifier states:");
        for label in ModifierLabel::ALL {
            match layout.assignment.index_for(label) {
                Some(index) => println!("  {:<10} keymap {}", label.as_str(), index),
                None => println!("  {:<10} (not defined)", label.as_str()),
            }
        }

        println!("\nDead keys: {}", layout.actions.dead_keys.len());
        for (state, glyph) in &layout.actions.dead_keys {
            let compositions = layout.compositions.get(glyph).map_or(0, Vec::len);
            println!(
                "  {:<6} {} {} ({} compositions)",
                state,
                glyph,
                describe_codepoint(glyph),
                compositions
            );
        }

        println!("\nKey rows: {}", layout.rows.len());

        if !loaded.diagnostics.is_empty() {
            println!("\nDiagnostics: {}", loaded.diagnostics.len());
            for diagnostic in &loaded.diagnostics {
                println!("  {diagnostic}");
            }
        }

        Ok(())
    }
}
