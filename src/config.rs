//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_STORE_FILE};
use crate::models::Season;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Belongings YAML file. Relative paths resolve against the working directory.
    #[serde(default)]
    pub store_file: Option<PathBuf>,
}

/// Output preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Colorize terminal output (still subject to NO_COLOR and TTY detection)
    #[serde(default = "default_color")]
    pub color: bool,
    /// Season used when `item add` is given no `--season`
    #[serde(default)]
    pub default_season: Season,
}

fn default_color() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            default_season: Season::default(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Belongings/config.toml`
/// - macOS: `~/Library/Application Support/Belongings/config.toml`
/// - Windows: `%APPDATA%\Belongings\config.toml`
///
/// The directory can be overridden with the `PB_CONFIG_DIR` environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Output preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path, honoring `PB_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using temp file + rename.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        if let Err(e) = fs::rename(&temp_path, config_path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e).context(format!(
                "Failed to rename temp config file to: {}",
                config_path.display()
            ));
        }

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// The store file, if set, must not be empty and must not point at a directory.
    pub fn validate(&self) -> Result<()> {
        if let Some(store_file) = &self.paths.store_file {
            if store_file.as_os_str().is_empty() {
                anyhow::bail!("Store file path cannot be empty");
            }
            if store_file.is_dir() {
                anyhow::bail!(
                    "Store file path points to a directory: {}",
                    store_file.display()
                );
            }
        }

        Ok(())
    }

    /// Resolves which store file to use.
    ///
    /// An explicit path (from `--file`) wins, then `paths.store_file`, then
    /// `pb.yaml` in the working directory.
    pub fn resolve_store_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.paths.store_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
    }
}
