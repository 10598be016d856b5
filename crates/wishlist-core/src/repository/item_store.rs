//! Item Store
//!
//! Authoritative in-memory collection with write-through persistence.
//! The in-memory list wins: a failed save is reported, never rolled back.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::clock::{Clock, IdGenerator};
use crate::domain::{DomainError, DomainResult, Item, ItemDraft, ItemId, StorageError};
use super::storage::StorageAdapter;
use super::traits::KeyValueSlot;

/// What `open` found in the slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing persisted yet
    Fresh,
    /// Loaded this many items
    Restored(usize),
    /// Payload unusable; started empty. The next save overwrites it.
    Recovered(StorageError),
}

pub struct ItemStore<S, C> {
    items: Vec<Item>,
    storage: StorageAdapter<S>,
    clock: C,
    ids: IdGenerator,
    min_name_len: usize,
    pending_error: Option<StorageError>,
}

impl<S: KeyValueSlot, C: Clock> ItemStore<S, C> {
    /// Load the persisted collection, falling back to an empty one.
    ///
    /// Loaded records are repaired before use: repeated ids get fresh ones
    /// and `updatedAt` is raised to `createdAt` where it lags. A repaired
    /// collection is saved straight back.
    pub fn open(storage: StorageAdapter<S>, clock: C, min_name_len: usize) -> (Self, LoadStatus) {
        let (mut items, status) = match storage.load() {
            Ok(Some(items)) => {
                let count = items.len();
                (items, LoadStatus::Restored(count))
            }
            Ok(None) => (Vec::new(), LoadStatus::Fresh),
            Err(e) => {
                log::warn!("[STORE] could not load `{}`, starting empty: {}", storage.key(), e);
                if matches!(e, StorageError::Malformed { .. }) {
                    match storage.back_up() {
                        Ok(true) => log::warn!("[STORE] unreadable payload kept under `{}`", storage.backup_key()),
                        Ok(false) => {}
                        Err(backup_err) => log::warn!("[STORE] backup failed: {}", backup_err),
                    }
                }
                (Vec::new(), LoadStatus::Recovered(e))
            }
        };
        log::info!("[STORE] opened `{}`: {:?}", storage.key(), status);

        let mut ids = IdGenerator::seeded(items.iter().map(|item| item.id));
        let repaired = repair_loaded(&mut items, &mut ids, clock.now());

        let mut store = Self {
            items,
            storage,
            clock,
            ids,
            min_name_len,
            pending_error: None,
        };
        if repaired > 0 {
            log::warn!("[STORE] repaired {} loaded record(s)", repaired);
            store.persist();
        }
        (store, status)
    }

    // ========================
    // Read
    // ========================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn find_index(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Last persistence failure, reported once
    pub fn take_storage_error(&mut self) -> Option<StorageError> {
        self.pending_error.take()
    }

    // ========================
    // Write
    // ========================

    /// Validate, prepend and persist a new item
    pub fn create(&mut self, draft: ItemDraft) -> DomainResult<Item> {
        let draft = draft.validate(self.min_name_len)?;
        let now = self.clock.now();
        let item = Item::new(self.ids.next(now), draft, now);

        self.items.insert(0, item.clone());
        log::debug!("[STORE] created item {} ({})", item.id, item.name);
        self.persist();
        Ok(item)
    }

    /// Overwrite the mutable fields of an existing item
    pub fn update(&mut self, id: ItemId, draft: ItemDraft) -> DomainResult<Item> {
        let index = self.find_index(id).ok_or(DomainError::NotFound(id))?;
        let draft = draft.validate(self.min_name_len)?;
        let now = self.clock.now();

        let item = &mut self.items[index];
        item.apply(draft, now);
        let updated = item.clone();
        log::debug!("[STORE] updated item {}", id);
        self.persist();
        Ok(updated)
    }

    pub fn toggle_bought(&mut self, id: ItemId) -> DomainResult<Item> {
        let index = self.find_index(id).ok_or(DomainError::NotFound(id))?;
        let now = self.clock.now();

        let item = &mut self.items[index];
        item.toggle_bought(now);
        let updated = item.clone();
        log::debug!("[STORE] item {} bought={}", id, updated.bought);
        self.persist();
        Ok(updated)
    }

    /// Remove an item for good. The caller is responsible for having asked the user.
    pub fn delete(&mut self, id: ItemId) -> DomainResult<Item> {
        let index = self.find_index(id).ok_or(DomainError::NotFound(id))?;
        let removed = self.items.remove(index);
        log::debug!("[STORE] deleted item {} ({})", id, removed.name);
        self.persist();
        Ok(removed)
    }

    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.items) {
            log::warn!("[STORE] save to `{}` failed, keeping in-memory state: {}", self.storage.key(), e);
            self.pending_error = Some(e);
        }
    }
}

/// Make loaded ids unique and timestamps ordered. Returns how many
/// records changed.
fn repair_loaded(items: &mut [Item], ids: &mut IdGenerator, now: DateTime<Utc>) -> usize {
    let mut seen = HashSet::with_capacity(items.len());
    let mut repaired = 0;
    for item in items.iter_mut() {
        let mut changed = false;
        if !seen.insert(item.id) {
            let fresh = ids.next(now);
            log::warn!("[STORE] duplicate id {} on `{}`, reassigned {}", item.id, item.name, fresh);
            item.id = fresh;
            seen.insert(fresh);
            changed = true;
        }
        if item.updated_at < item.created_at {
            item.updated_at = item.created_at;
            changed = true;
        }
        if changed {
            repaired += 1;
        }
    }
    repaired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::domain::{Priority, ValidationError};
    use crate::repository::MemorySlot;
    use chrono::{Duration, TimeZone, Utc};

    fn setup() -> (ItemStore<MemorySlot, ManualClock>, MemorySlot, ManualClock) {
        let slot = MemorySlot::default();
        let clock = ManualClock::at(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap());
        let (store, status) = ItemStore::open(StorageAdapter::new(slot.clone(), "WISHLIST"), clock.clone(), 2);
        assert_eq!(status, LoadStatus::Fresh);
        (store, slot, clock)
    }

    #[test]
    fn test_create_prepends_and_persists() {
        let (mut store, slot, clock) = setup();
        let first = store.create(ItemDraft::named("Headphone")).unwrap();
        clock.advance(Duration::seconds(1));
        let second = store.create(ItemDraft::named("Keyboard").priority(Priority::High)).unwrap();

        assert_eq!(store.items()[0].id, second.id);
        assert_eq!(store.items()[1].id, first.id);
        assert!(!first.bought);
        assert_eq!(first.created_at, first.updated_at);

        let saved = slot.get("WISHLIST").unwrap();
        assert!(saved.contains("Keyboard") && saved.contains("Headphone"));
    }

    #[test]
    fn test_create_rejects_short_names_without_mutation() {
        let (mut store, slot, _) = setup();
        for name in ["", "x", "   "] {
            let err = store.create(ItemDraft::named(name)).unwrap_err();
            assert_eq!(err, DomainError::Validation(ValidationError::NameTooShort { min: 2 }));
        }
        assert!(store.is_empty());
        assert_eq!(slot.get("WISHLIST"), None);
    }

    #[test]
    fn test_same_tick_creates_get_distinct_ids() {
        let (mut store, _, _) = setup();
        let a = store.create(ItemDraft::named("One")).unwrap();
        let b = store.create(ItemDraft::named("Two")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_update_refreshes_updated_at_only() {
        let (mut store, _, clock) = setup();
        let item = store.create(ItemDraft::named("Laptop")).unwrap();
        clock.advance(Duration::minutes(5));

        let updated = store
            .update(item.id, ItemDraft::named("Laptop Pro").price(15_000_000.0).bought(true))
            .unwrap();
        assert_eq!(updated.created_at, item.created_at);
        assert!(updated.updated_at > item.updated_at);
        assert!(updated.bought);
        assert_eq!(store.find(item.id), Some(&updated));
    }

    #[test]
    fn test_update_validation_failure_leaves_item() {
        let (mut store, _, _) = setup();
        let item = store.create(ItemDraft::named("Laptop")).unwrap();
        assert!(store.update(item.id, ItemDraft::named("L")).is_err());
        assert_eq!(store.find(item.id), Some(&item));
    }

    #[test]
    fn test_missing_ids_report_not_found() {
        let (mut store, _, _) = setup();
        assert_eq!(store.update(42, ItemDraft::named("Laptop")), Err(DomainError::NotFound(42)));
        assert_eq!(store.toggle_bought(42), Err(DomainError::NotFound(42)));
        assert!(store.delete(42).unwrap_err().is_not_found());
        assert_eq!(store.find(42), None);
        assert_eq!(store.find_index(42), None);
    }

    #[test]
    fn test_toggle_flips_and_touches() {
        let (mut store, _, clock) = setup();
        let item = store.create(ItemDraft::named("Sepatu")).unwrap();
        clock.advance(Duration::milliseconds(1));
        let toggled = store.toggle_bought(item.id).unwrap();
        assert!(toggled.bought);
        assert!(toggled.updated_at > item.updated_at);
        clock.advance(Duration::milliseconds(1));
        assert!(!store.toggle_bought(item.id).unwrap().bought);
    }

    #[test]
    fn test_delete_then_find() {
        let (mut store, _, _) = setup();
        let keep = store.create(ItemDraft::named("Keep")).unwrap();
        let gone = store.create(ItemDraft::named("Gone")).unwrap();

        let removed = store.delete(gone.id).unwrap();
        assert_eq!(removed.id, gone.id);
        assert_eq!(store.len(), 1);
        assert_eq!(store.find(gone.id), None);
        assert_eq!(store.find_index(keep.id), Some(0));
    }

    #[test]
    fn test_failed_save_keeps_memory_state() {
        let (mut store, slot, _) = setup();
        slot.set_fail_writes(true);

        let item = store.create(ItemDraft::named("Headphone")).unwrap();
        assert_eq!(store.find(item.id), Some(&item));
        assert!(matches!(store.take_storage_error(), Some(StorageError::Write { .. })));
        assert_eq!(store.take_storage_error(), None);
    }

    #[test]
    fn test_open_recovers_from_malformed_payload() {
        let slot = MemorySlot::default();
        slot.write("WISHLIST", "not json").unwrap();
        let clock = ManualClock::at(Utc::now());
        let (store, status) = ItemStore::open(StorageAdapter::new(slot.clone(), "WISHLIST"), clock, 2);
        assert!(store.is_empty());
        assert!(matches!(status, LoadStatus::Recovered(StorageError::Malformed { .. })));
        assert_eq!(slot.get("WISHLIST.bak").as_deref(), Some("not json"));
    }
}
