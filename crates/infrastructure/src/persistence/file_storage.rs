//! Key-value storage persisted as a JSON file.
//!
//! Stores every key in one file in the platform-specific config directory:
//! - Linux: ~/.config/imageer/storage.json
//! - macOS: ~/Library/Application Support/imageer/storage.json
//! - Windows: %APPDATA%/imageer/storage.json

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use imageer_application::error::StorageError;
use imageer_application::ports::KeyValueStorage;
use parking_lot::RwLock;

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

/// Name of the storage file inside the state directory.
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Returns the default state directory, if the platform has one.
#[must_use]
pub fn default_state_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("imageer"))
}

/// Storage that keeps all entries in memory and rewrites the file on every
/// change, so a successful write survives a restart.
#[derive(Debug)]
pub struct FileKeyValueStorage {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileKeyValueStorage {
    /// Opens the storage file in `dir`, starting empty if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        let path = dir.join(STORAGE_FILE_NAME);
        let entries: BTreeMap<String, String> = match fs::read(&path) {
            Ok(content) => {
                from_json_bytes(&content).map_err(|e| StorageError::Corrupt(e.to_string()))?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), entries = entries.len(), "opened storage");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Opens the storage in [`default_state_dir`].
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no config directory or the file
    /// cannot be read.
    pub fn open_default() -> Result<Self, StorageError> {
        let dir = default_state_dir().ok_or_else(|| {
            StorageError::Unavailable("could not determine config directory".to_string())
        })?;
        Self::open(&dir)
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content =
            to_json_stable_bytes(entries).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStorage for FileKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write();
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_starts_empty() {
        let temp = TempDir::new().unwrap();
        let storage = FileKeyValueStorage::open(temp.path()).unwrap();
        assert_eq!(storage.get("theme").unwrap(), None);
        assert!(!storage.path().exists());
    }

    #[test]
    fn values_survive_reopen() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested");

        let storage = FileKeyValueStorage::open(&dir).unwrap();
        storage.set("theme", "dark").unwrap();
        storage.set("imageer:images:perPage", "50").unwrap();
        drop(storage);

        let reopened = FileKeyValueStorage::open(&dir).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(
            reopened.get("imageer:images:perPage").unwrap().as_deref(),
            Some("50")
        );
    }

    #[test]
    fn file_is_stable_json() {
        let temp = TempDir::new().unwrap();
        let storage = FileKeyValueStorage::open(temp.path()).unwrap();
        storage.set("theme", "light").unwrap();
        storage.set("imageer:images:sortBy", "updatedAt").unwrap();

        let content = fs::read_to_string(storage.path()).unwrap();
        assert_eq!(
            content,
            "{\n  \"imageer:images:sortBy\": \"updatedAt\",\n  \"theme\": \"light\"\n}\n"
        );
    }

    #[test]
    fn remove_deletes_key() {
        let temp = TempDir::new().unwrap();
        let storage = FileKeyValueStorage::open(temp.path()).unwrap();
        storage.set("theme", "dark").unwrap();

        storage.remove("theme").unwrap();
        storage.remove("theme").unwrap();

        let reopened = FileKeyValueStorage::open(temp.path()).unwrap();
        assert_eq!(reopened.get("theme").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(STORAGE_FILE_NAME), "{not json").unwrap();

        let error = FileKeyValueStorage::open(temp.path()).unwrap_err();
        assert!(matches!(error, StorageError::Corrupt(_)));
    }

    #[test]
    fn default_dir_is_namespaced() {
        if let Some(dir) = default_state_dir() {
            assert!(dir.ends_with("imageer"));
        }
    }
}
