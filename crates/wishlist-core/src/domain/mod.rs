//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde, chrono and thiserror).

mod entity;
mod item;
mod view_state;

pub use entity::{DomainError, DomainResult, StorageError, ValidationError};
pub use item::{Item, ItemDraft, ItemId, Priority, ValidatedDraft, MIN_NAME_LEN};
pub use view_state::{EmptyState, Filter, SortMode, Stats, ViewState};
