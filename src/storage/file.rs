//! JSON file storage
//!
//! Keeps every key in one JSON object on disk.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde_json::Value;

use super::KeyValueStorage;
use crate::error::{Result, StoriesError};

type Entries = BTreeMap<String, Value>;

/// Storage backed by a single JSON object file
///
/// ## Concurrency:
/// - `write_lock` serializes read-modify-write cycles within the process
/// - Reads go straight to disk so another process's writes are picked up
pub struct FileStorage {
    /// Location of the JSON file
    path: PathBuf,

    /// Serializes `set` calls
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Open storage at `path`, creating the parent directory if needed
    ///
    /// The file itself is created lazily on the first `set`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole object; a missing file is an empty store
    ///
    /// Entries that are not strings are kept as-is so a rewrite preserves them.
    fn read_map(&self) -> Result<Entries> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_map(&self, map: &Entries) -> Result<()> {
        let tmp_path = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(map)?;
        fs::write(&tmp_path, bytes)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.read_map()?.remove(key) {
            Some(Value::String(value)) => Ok(Some(value)),
            Some(_) => Err(StoriesError::Storage(format!("value for {key} is not a string"))),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _write_guard = self.write_lock.lock();

        // Malformed JSON would otherwise block every future write. I/O errors
        // leave the file alone.
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(e @ StoriesError::Serialization(_)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Replacing malformed storage file");
                Entries::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(&map)?;

        tracing::debug!(key, path = %self.path.display(), "Persisted value");
        Ok(())
    }
}
