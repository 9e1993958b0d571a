//! Key-value storage for fetched events.
//!
//! The layout never touches storage; callers inject an [`EventCache`]
//! backend into [`crate::YearCache`] instead.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::EventsError;

/// String key-value store backing the event cache.
pub trait EventCache {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> Result<(), EventsError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), EventsError>;

    /// Returns every stored key.
    fn keys(&self) -> Vec<String>;
}

/// In-process cache backed by a `BTreeMap`.
#[derive(Debug, Default, Clone)]
pub struct MemoryCache {
    entries: BTreeMap<String, String>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EventCache for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), EventsError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), EventsError> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// Cache that stores each entry as `<dir>/<sha256(key)>.json`.
///
/// File names are fixed-length digests, so any key is a valid file name and
/// distinct keys never share a file. The key itself is stored alongside the
/// value.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

const FILE_SUFFIX: &str = ".json";

#[derive(Serialize, Deserialize)]
struct StoredEntry {
    key: String,
    value: String,
}

impl FileCache {
    /// Opens (and creates if needed) a cache directory.
    ///
    /// # Errors
    ///
    /// Returns [`EventsError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, EventsError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| EventsError::Io {
            path: dir.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { dir })
    }

    /// Returns the cache directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, EventsError> {
        if key.is_empty() {
            return Err(EventsError::InvalidCacheKey {
                key: key.to_string(),
            });
        }
        let digest = format!("{:x}", Sha256::digest(key.as_bytes()));
        Ok(self.dir.join(format!("{digest}{FILE_SUFFIX}")))
    }

    fn read_entry(path: &Path) -> Option<StoredEntry> {
        let raw = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "cache entry unreadable");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "cache entry malformed");
                None
            }
        }
    }
}

impl EventCache for FileCache {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key).ok()?;
        let entry = Self::read_entry(&path)?;
        (entry.key == key).then_some(entry.value)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), EventsError> {
        let path = self.path_for(key)?;
        let json = serde_json::to_string(&StoredEntry {
            key: key.to_string(),
            value,
        })?;
        fs::write(&path, json).map_err(|e| EventsError::Io {
            path,
            reason: e.to_string(),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), EventsError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(EventsError::Io {
                path,
                reason: e.to_string(),
            }),
        }
    }

    fn keys(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        let mut keys: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(FILE_SUFFIX))
            })
            .filter_map(|path| Self::read_entry(&path))
            .map(|entry| entry.key)
            .collect();
        keys.sort();
        keys
    }
}
