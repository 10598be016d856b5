//! Repository Layer
//!
//! Persistence abstractions and the in-memory item store.

mod traits;
mod storage;
mod item_store;

#[cfg(test)]
mod tests;

pub use traits::KeyValueSlot;
pub use storage::{FileSlot, MemorySlot, StorageAdapter};
pub use item_store::{ItemStore, LoadStatus};
