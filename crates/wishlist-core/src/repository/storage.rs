//! Storage Adapter
//!
//! Serializes the whole item collection as one JSON array under a single
//! key. No versioning: the array of camelCase records is the format.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;

use crate::domain::{Item, StorageError};
use super::traits::KeyValueSlot;

/// Reads and writes the item collection through a [`KeyValueSlot`]
#[derive(Debug, Clone)]
pub struct StorageAdapter<S> {
    slot: S,
    key: String,
}

impl<S: KeyValueSlot> StorageAdapter<S> {
    pub fn new(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// `Ok(None)` means nothing was ever saved, which is not the same as
    /// a saved empty list.
    pub fn load(&self) -> Result<Option<Vec<Item>>, StorageError> {
        let Some(raw) = self.slot.read(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str::<Vec<Item>>(&raw)
            .map(Some)
            .map_err(|e| StorageError::Malformed {
                key: self.key.clone(),
                reason: e.to_string(),
            })
    }

    /// Where [`back_up`](Self::back_up) copies an unreadable payload
    pub fn backup_key(&self) -> String {
        format!("{}.bak", self.key)
    }

    /// Copy the raw payload aside so the next save doesn't destroy it.
    /// Returns `false` if there was nothing to copy.
    pub fn back_up(&self) -> Result<bool, StorageError> {
        match self.slot.read(&self.key)? {
            Some(raw) => {
                self.slot.write(&self.backup_key(), &raw)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn save(&self, items: &[Item]) -> Result<(), StorageError> {
        let json = serde_json::to_string(items).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.slot.write(&self.key, &json)
    }
}

/// In-memory slot. Clones share the same map, which lets tests inspect
/// what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemorySlot {
    /// Make every following write fail, as a full quota would
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key under a directory, for native builds
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueSlot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_err = |e: std::io::Error| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        };
        fs::create_dir_all(&self.dir).map_err(write_err)?;

        // Write to a sibling temp file first so a crash never leaves half a payload
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(write_err)?;
        fs::rename(&tmp, &path).map_err(write_err)
    }
}
