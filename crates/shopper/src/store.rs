//! Persistent key/value store for shopper state.
//!
//! The store is the survival boundary: collections serialized here outlive
//! the process. Values are opaque strings overwritten wholesale on every
//! write; the state manager owns the JSON encoding layered on top.
//!
//! Stores are synchronous and uncoordinated. Two stores opened over the
//! same underlying location do not see each other's writes until the next
//! read, and the last writer wins.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Well-known store keys.
pub mod keys {
    /// Key for the serialized cart collection.
    pub const CART: &str = "cart";

    /// Key for the serialized wishlist collection.
    pub const WISHLIST: &str = "wishlist";
}

/// Abstract key/value store backend.
pub trait StateStore {
    /// Read the value for `key`, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing storage cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value for `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

/// File-backed store: one `<key>.json` document per key under a data
/// directory.
///
/// No locking. Concurrent writers to the same directory are
/// last-writer-wins, matching the single-shopper model this crate is
/// built for.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CreateDir`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// The directory this store persists into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::write(self.path_for(key), value).map_err(|source| StoreError::Io {
            key: key.to_owned(),
            source,
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.read(keys::CART).unwrap().is_none());

        store.write(keys::CART, "[]").unwrap();
        assert_eq!(store.read(keys::CART).unwrap().as_deref(), Some("[]"));

        store.remove(keys::CART).unwrap();
        assert!(store.read(keys::CART).unwrap().is_none());
    }

    #[test]
    fn test_memory_store_remove_absent_key_is_ok() {
        let mut store = MemoryStore::new();
        store.remove("never-written").unwrap();
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        assert!(store.read(keys::WISHLIST).unwrap().is_none());

        store.write(keys::WISHLIST, r#"[{"id":"p1"}]"#).unwrap();
        assert_eq!(
            store.read(keys::WISHLIST).unwrap().as_deref(),
            Some(r#"[{"id":"p1"}]"#)
        );

        // One document per key
        assert!(dir.path().join("wishlist.json").is_file());

        store.remove(keys::WISHLIST).unwrap();
        assert!(store.read(keys::WISHLIST).unwrap().is_none());
        assert!(!dir.path().join("wishlist.json").exists());
    }

    #[test]
    fn test_file_store_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state").join("shopper");

        let store = FileStore::open(&nested).unwrap();
        assert_eq!(store.dir(), nested.as_path());
        assert!(nested.is_dir());
    }

    #[test]
    fn test_file_store_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.write(keys::CART, "[1,2,3]").unwrap();
        store.write(keys::CART, "[]").unwrap();
        assert_eq!(store.read(keys::CART).unwrap().as_deref(), Some("[]"));
    }
}
