//! Conversion command: `.keylayout` in, `.klc` out.

use crate::cli::common::{validate_input, CliError, CliResult};
use crate::config::Config;
use crate::klc;
use crate::services::LayoutService;
use clap::Args;
use std::path::PathBuf;

/// Convert a macOS .keylayout file into a Windows .klc file
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Input .keylayout file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory (defaults to the input file's directory)
    #[arg(short, long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        validate_input(&self.input)?;

        // Naming problems are fatal before any file is touched
        let keyboard_name = klc::keyboard_name(&self.input)
            .map_err(|e| CliError::validation(e.to_string()))?;
        klc::klc_filename(&keyboard_name).map_err(|e| CliError::validation(e.to_string()))?;

        let output_dir = match (&self.output_dir, &config.output.directory) {
            (Some(dir), _) | (None, Some(dir)) => dir.clone(),
            (None, None) => LayoutService::default_output_dir(&self.input)
                .map_err(|e| CliError::io(format!("{e:#}")))?,
        };
        std::fs::create_dir_all(&output_dir).map_err(|e| {
            CliError::io(format!(
                "Failed to create output directory {}: {}",
                output_dir.display(),
                e
            ))
        })?;

        let conversion = LayoutService::convert(&self.input, &output_dir, config)
            .map_err(|e| CliError::io(format!("Conversion failed: {e:#}")))?;

        for diagnostic in &conversion.diagnostics {
            println!("{diagnostic}");
        }
        println!(
            "written {} to {}",
            conversion.keyboard_name, conversion.klc_filename
        );

        Ok(())
    }
}
