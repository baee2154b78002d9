//! Configuration management CLI commands.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::Config;
use crate::models::Season;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

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
    /// Belongings YAML file used when --file is not given
    #[arg(long, value_name = "FILE")]
    store_file: Option<PathBuf>,

    /// Season used by `item add` when --season is omitted (s, w or n)
    #[arg(long, value_name = "SEASON")]
    default_season: Option<String>,

    /// Enable or disable colored output
    #[arg(long, value_name = "BOOL")]
    color: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: Option<String>,
    paths: PathsOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    store_file: String,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    color: bool,
    default_season: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.store_file.is_none() && self.default_season.is_none() && self.color.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --store-file, --default-season, or --color",
            ));
        }

        let mut config = load_config()?;

        if let Some(path) = &self.store_file {
            config.paths.store_file = Some(path.clone());
        }

        if let Some(season) = &self.default_season {
            config.ui.default_season = season.parse::<Season>()?;
        }

        if let Some(color) = self.color {
            config.ui.color = color;
        }

        config.validate().map_err(|e| CliError::validation(e.to_string()))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        config_file: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        paths: PathsOutput {
            store_file: config
                .resolve_store_path(None)
                .to_string_lossy()
                .to_string(),
        },
        ui: UiOutput {
            color: config.ui.color,
            default_season: config.ui.default_season.to_string(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {}", e)))?;

    println!("{}", json);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Belongings Configuration");
    println!("========================");
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("Config File: {}", path.display());
        println!();
    }

    println!("Paths:");
    match &config.paths.store_file {
        Some(path) => println!("  Store File: {}", path.display()),
        None => println!(
            "  Store File: {} (default)",
            config.resolve_store_path(None).display()
        ),
    }
    println!();

    println!("UI:");
    println!("  Color: {}", if config.ui.color { "on" } else { "off" });
    println!(
        "  Default Season: {} ({})",
        config.ui.default_season,
        config.ui.default_season.label()
    );
    println!();
}
