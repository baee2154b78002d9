//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use belongings::models::Store;
use belongings::services::StoreService;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the pb binary (set by cargo at compile time)
pub fn pb_bin() -> &'static str {
    env!("CARGO_BIN_EXE_pb")
}

/// Builds a store with the four usual categories and a few items.
///
/// ```text
/// clothing:      coat (w, index 0), shorts (s)
/// tech:          laptop (n), phone (n)
/// health:        (empty)
/// personal-care: toothbrush (n)
/// ```
pub fn sample_store() -> Store {
    let mut store = Store::new();
    for name in ["clothing", "tech", "health", "personal-care"] {
        store.add_category(name).expect("valid category");
    }
    store.add_item("clothing", "shorts", "s", None).unwrap();
    store.add_item("clothing", "coat", "w", Some(0)).unwrap();
    store.add_item("tech", "laptop", "n", None).unwrap();
    store.add_item("tech", "phone", "n", None).unwrap();
    store.add_item("personal-care", "toothbrush", "n", None).unwrap();
    store
}

/// Writes a store to `pb.yaml` inside a fresh temp directory.
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub fn create_temp_store_file(store: &Store) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("pb.yaml");
    StoreService::save(store, &store_path).expect("Failed to write store file");
    (store_path, temp_dir)
}

/// Reads a store file back for assertions.
pub fn read_store(path: &Path) -> Store {
    StoreService::load(path).expect("Failed to read store file")
}

/// Creates a Command with an isolated config directory and colors disabled.
pub fn pb_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(pb_bin());
    cmd.env("PB_CONFIG_DIR", config_dir);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs `pb` against a store file, with config isolated under `temp_dir`.
pub fn run_pb(temp_dir: &TempDir, store_path: &Path, args: &[&str]) -> Output {
    let mut full_args: Vec<&str> = args.to_vec();
    let path = store_path.to_str().expect("utf-8 temp path");
    full_args.extend(["--file", path]);
    pb_command(&full_args, &temp_dir.path().join("config"))
        .output()
        .expect("Failed to execute command")
}

/// Stdout of a finished command as a String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr of a finished command as a String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
