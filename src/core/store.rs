//! Durable key-value storage.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Cached config directory path.
static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the tasklist config directory (cached).
fn config_dir() -> &'static Path {
    CONFIG_DIR.get_or_init(|| {
        directories::ProjectDirs::from("", "", "tasklist")
            .map(|d| d.config_dir().to_path_buf())
            .unwrap_or_else(dirs_fallback)
    })
}

/// Trait for string key-value persistence.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory store (no persistence).
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one entry. Seeding is not counted as a write.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Number of `set` calls made so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// On-disk store document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreDocument {
    /// Schema version for migration.
    pub version: u32,
    /// Stored values by key.
    #[serde(default)]
    pub entries: HashMap<String, String>,
}

impl StoreDocument {
    /// Current schema version.
    pub const VERSION: u32 = 1;
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            version: Self::VERSION,
            entries: HashMap::new(),
        }
    }
}

/// Key-value store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at the default location under the user config directory.
    pub fn open_default() -> Self {
        Self::with_path(Self::default_path())
    }

    /// Store at a custom path. The file is created on first write.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store file path.
    pub fn default_path() -> PathBuf {
        config_dir().join("store.json")
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document. A missing or unreadable document is treated as empty.
    fn load(&self) -> io::Result<StoreDocument> {
        if !self.path.exists() {
            return Ok(StoreDocument::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable store file");
                Ok(StoreDocument::default())
            }
        }
    }

    /// Write the document (atomic write).
    fn write(&self, doc: &StoreDocument) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Atomic write: temp file + rename
        let temp_path = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(doc)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.load()?.entries.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        // Reload so entries written under other keys survive.
        let mut doc = self.load()?;
        doc.version = StoreDocument::VERSION;
        doc.entries.insert(key.to_string(), value.to_string());
        self.write(&doc)
    }
}

/// Fallback config directory if `directories` fails.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(|h| Path::new(&h).join(".config").join("tasklist"))
        .unwrap_or_else(|_| PathBuf::from(".tasklist"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_counts_writes() {
        let mut store = MemoryStore::with_entry("tasks", "[]");
        assert_eq!(store.writes(), 0);
        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get("other").unwrap(), None);

        store.set("tasks", "[\"a\"]").unwrap();
        assert_eq!(store.writes(), 1);
        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[\"a\"]"));
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn file_store_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileStore::with_path(temp_dir.path().join("store.json"));
        assert_eq!(store.get("tasks").unwrap(), None);
    }

    #[test]
    fn file_store_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("store.json");

        {
            let mut store = FileStore::with_path(path.clone());
            store.set("tasks", "[\"a\"]").unwrap();
            store.set("other", "keep").unwrap();
            store.set("tasks", "[\"b\"]").unwrap();
        }

        let store = FileStore::with_path(path.clone());
        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[\"b\"]"));
        assert_eq!(store.get("other").unwrap().as_deref(), Some("keep"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn file_store_unreadable_document() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut store = FileStore::with_path(path.clone());
        assert_eq!(store.get("tasks").unwrap(), None);

        store.set("tasks", "[]").unwrap();
        let doc: StoreDocument =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc.version, StoreDocument::VERSION);
        assert_eq!(doc.entries.get("tasks").map(String::as_str), Some("[]"));
    }
}
