//! Shared CLI plumbing: error type, exit codes and global options.

use crate::config::Config;
use crate::error::StoreError;
use crate::models::Store;
use crate::services::StoreService;
use clap::Args;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: duplicate, not found, invalid season, malformed file
    ValidationError = 1,
    /// File system failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by command handlers.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// Exit code the process should terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Validation or domain error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        if err.is_validation() {
            Self::validation(err.to_string())
        } else {
            Self::io(err.to_string())
        }
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Options accepted before or after any subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Path to the belongings YAML file (defaults to the configured file, then pb.yaml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl GlobalArgs {
    /// Resolves the store path against the configuration.
    pub fn path(&self, config: &Config) -> PathBuf {
        config.resolve_store_path(self.file.as_deref())
    }

    /// Loads the store this command operates on, with its path.
    pub fn load(&self, config: &Config) -> CliResult<(Store, PathBuf)> {
        let path = self.path(config);
        let store = StoreService::load(&path).map_err(|e| with_path(e, &path))?;
        Ok((store, path))
    }
}

/// Saves the store back to the path it was loaded from.
pub fn save_store(store: &Store, path: &std::path::Path) -> CliResult<()> {
    StoreService::save(store, path).map_err(|e| with_path(e, path))
}

/// Loads the application configuration.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

fn with_path(err: StoreError, path: &std::path::Path) -> CliError {
    let mut cli_err = CliError::from(err);
    cli_err.message = format!("{} ({})", cli_err.message, path.display());
    cli_err
}
