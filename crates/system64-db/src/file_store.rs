//! JSON-file backed store.
//!
//! The whole key set lives in one JSON object on disk. Every write rewrites
//! the file through a temporary sibling and a rename, so a crash leaves
//! either the old or the new contents.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::DbError;
use crate::keys::StoreKey;
use crate::store::KeyValueStore;

/// Store persisted as a single JSON object file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Io`] if the file exists but cannot be read.
    /// Returns [`DbError::Serialization`] if it is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DbError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(DbError::Io(e)),
        };
        info!(path = %path.display(), keys = entries.len(), "Opened state file");
        Ok(Self { path, entries })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), DbError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "State file written");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn save(&mut self, key: StoreKey, value: &str) -> Result<(), DbError> {
        self.entries.insert(key.as_str().to_owned(), value.to_owned());
        self.flush()
    }

    fn load(&self, key: StoreKey) -> Result<Option<String>, DbError> {
        Ok(self.entries.get(key.as_str()).cloned())
    }

    fn remove(&mut self, key: StoreKey) -> Result<(), DbError> {
        if self.entries.remove(key.as_str()).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
