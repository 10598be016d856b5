//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for persistence backends.
//! Implementations can use browser localStorage, files, in-memory maps, etc.

use crate::domain::StorageError;

/// A string key-value store holding one serialized payload per key
pub trait KeyValueSlot {
    /// Read the payload under `key`; `Ok(None)` if it was never written
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the payload under `key`
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueSlot + ?Sized> KeyValueSlot for &T {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}
