//! CLI command handlers.
//!
//! Every mutating command loads the store file, applies exactly one
//! operation and saves it back.

pub mod category;
pub mod common;
pub mod config;
pub mod item;
pub mod show;

// Re-export types used by main.rs and tests
pub use category::CategoryArgs;
pub use common::{CliError, CliResult, ExitCode, GlobalArgs};
pub use config::ConfigArgs;
pub use item::ItemArgs;
pub use show::ShowArgs;
