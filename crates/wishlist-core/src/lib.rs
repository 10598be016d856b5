//! Wishlist Core
//!
//! Layered architecture:
//! - domain: Items, drafts, view state and errors
//! - repository: Persistence slots, the storage adapter and the item store
//! - query: Pure filter / search / sort pipeline
//! - controller: View state and edit session transitions
//! - wishlist: The single handle the page drives

pub mod clock;
pub mod config;
pub mod controller;
pub mod domain;
pub mod query;
pub mod repository;
pub mod wishlist;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::WishlistConfig;
pub use controller::{EditSession, FormIntent};
pub use domain::{
    DomainError, DomainResult, EmptyState, Filter, Item, ItemDraft, ItemId, Priority, SortMode,
    Stats, StorageError, ValidationError, ViewState,
};
pub use repository::{KeyValueSlot, LoadStatus, MemorySlot};
pub use wishlist::{Applied, Notice, Wishlist};
