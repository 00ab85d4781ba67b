//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Company name for the COPYRIGHT and COMPANY lines
    #[arg(long, value_name = "NAME")]
    company: Option<String>,

    /// Short locale tag (e.g. "us")
    #[arg(long, value_name = "TAG")]
    locale_tag: Option<String>,

    /// Locale name (e.g. "en-US")
    #[arg(long, value_name = "NAME")]
    locale_name: Option<String>,

    /// Language name (e.g. "English (United States)")
    #[arg(long, value_name = "NAME")]
    locale_name_long: Option<String>,

    /// Windows locale id, four hex digits (e.g. "0409")
    #[arg(long, value_name = "HEX")]
    locale_id: Option<String>,

    /// Codepoint inserted for ligature outputs
    #[arg(long, value_name = "HEX")]
    placeholder: Option<String>,

    /// Default output directory for converted files
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, config_path: &Path) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config_path),
            ConfigCommand::Set(args) => args.execute(config_path),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, config_path: &Path) -> CliResult<()> {
        let config = Config::load_or_default(config_path)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            let json = serde_json::to_string_pretty(&config).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&config, config_path);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.locale_tag.is_none()
            && self.locale_name.is_none()
            && self.locale_name_long.is_none()
            && self.locale_id.is_none()
            && self.placeholder.is_none()
            && self.output_dir.is_none()
    }

    /// Execute set command
    pub fn execute(&self, config_path: &Path) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified, see --help",
            ));
        }

        let mut config = Config::load_or_default(config_path)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let metadata = &mut config.metadata;
        for (target, value) in [
            (&mut metadata.company, &self.company),
            (&mut metadata.locale_tag, &self.locale_tag),
            (&mut metadata.locale_name, &self.locale_name),
            (&mut metadata.locale_name_long, &self.locale_name_long),
        ] {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }
        if let Some(locale_id) = &self.locale_id {
            config.metadata.locale_id = locale_id.to_lowercase();
        }
        if let Some(placeholder) = &self.placeholder {
            config.output.placeholder = placeholder.to_lowercase();
        }
        if let Some(dir) = &self.output_dir {
            config.output.directory = Some(dir.clone());
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        config
            .save_to(config_path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, config_path: &Path) {
    let metadata = &config.metadata;
    println!("Configuration file: {}", config_path.display());
    println!();
    println!("Metadata:");
    println!("  Company:          {}", metadata.company);
    println!("  Locale tag:       {}", metadata.locale_tag);
    println!("  Locale name:      {}", metadata.locale_name);
    println!("  Language name:    {}", metadata.locale_name_long);
    println!("  Locale id:        {}", metadata.locale_id);
    println!();
    println!("Output:");
    println!("  Placeholder:      {}", config.output.placeholder);
    match &config.output.directory {
        Some(dir) => println!("  Directory:        {}", dir.display()),
        None => println!("  Directory:        (next to the input file)"),
    }
}
