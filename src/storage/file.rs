// Bookmarky file-backed storage slot
// Persists the article collection as a single JSON file on disk.
// The default location is `articles.json` under the platform data directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::platform;
use crate::storage::StorageSlot;
use crate::types::errors::StoreError;

/// Storage slot backed by a file on disk.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Creates a slot at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a slot at the platform default location.
    ///
    /// - **Linux**: `~/.local/share/bookmarky/articles.json`
    /// - **macOS**: `~/Library/Application Support/Bookmarky/articles.json`
    /// - **Windows**: `%APPDATA%/Bookmarky/articles.json`
    pub fn default_location() -> Self {
        Self {
            path: platform::get_data_dir().join("articles.json"),
        }
    }

    /// Returns the path to the slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    /// Reads the slot file. A missing file is not an error — it means nothing
    /// has been persisted yet.
    fn read(&self) -> Result<Option<String>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Persistence(format!("Failed to read slot file: {}", e)))?;
        Ok(Some(contents))
    }

    /// Overwrites the slot file. Writes to a sibling temp file first and
    /// renames it into place, so a reader never sees a partial write.
    fn write(&mut self, contents: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::Persistence(format!("Failed to create data directory: {}", e))
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)
            .map_err(|e| StoreError::Persistence(format!("Failed to write slot file: {}", e)))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| StoreError::Persistence(format!("Failed to replace slot file: {}", e)))?;

        Ok(())
    }
}
