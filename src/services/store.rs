//! Store file I/O service.
//!
//! Centralizes reading and writing the YAML store file so every command
//! handles missing files, parse errors and atomic writes the same way.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::StoreResult;
use crate::models::Store;
use crate::parser;

/// Service for loading and saving the belongings file.
pub struct StoreService;

impl StoreService {
    /// Loads a store from a YAML file.
    ///
    /// A file that does not exist yet yields an empty store.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use belongings::services::StoreService;
    ///
    /// let store = StoreService::load(Path::new("pb.yaml"))?;
    /// println!("{} categories", store.len());
    /// # Ok::<(), belongings::error::StoreError>(())
    /// ```
    pub fn load(path: &Path) -> StoreResult<Store> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "store file missing, starting empty");
                return Ok(Store::new());
            }
            Err(e) => return Err(e.into()),
        };

        let store = parser::parse_store(&content)?;
        debug!(
            path = %path.display(),
            categories = store.len(),
            items = store.item_count(),
            "loaded store"
        );
        Ok(store)
    }

    /// Saves a store to a YAML file, overwriting it.
    ///
    /// Writes to a temp file next to the target and renames it into place,
    /// so an interrupted save never leaves a truncated file behind.
    pub fn save(store: &Store, path: &Path) -> StoreResult<()> {
        let content = parser::serialize_store(store)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp_path = temp_path_for(path);
        fs::write(&temp_path, content)?;
        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        info!(path = %path.display(), "saved store");
        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "pb.yaml".into());
    name.push(".tmp");
    path.with_file_name(name)
}
