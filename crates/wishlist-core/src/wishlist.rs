//! Wishlist Handle
//!
//! Single owner of the item store and the view controller. Every intent
//! from the page goes through here, and every state change bumps the
//! revision and notifies subscribers that a render is due.

use crate::clock::Clock;
use crate::config::WishlistConfig;
use crate::controller::{EditSession, FormIntent, ViewController};
use crate::domain::{
    DomainError, DomainResult, EmptyState, Filter, Item, ItemDraft, ItemId, SortMode, Stats,
    StorageError, ViewState,
};
use crate::query;
use crate::repository::{ItemStore, KeyValueSlot, LoadStatus, StorageAdapter};

/// User-facing confirmation, one per successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ItemAdded,
    ChangesSaved,
    StatusUpdated,
    ItemDeleted,
    FilterReset,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::ItemAdded => "Item added",
            Notice::ChangesSaved => "Changes saved",
            Notice::StatusUpdated => "Status updated",
            Notice::ItemDeleted => "Item deleted",
            Notice::FilterReset => "Filter reset",
        }
    }
}

/// Result of a successful item mutation
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    /// The item after the change; for deletes, the removed item
    pub item: Item,
    pub notice: Notice,
}

type Listener = Box<dyn Fn()>;

pub struct Wishlist<S, C> {
    store: ItemStore<S, C>,
    controller: ViewController,
    load_status: LoadStatus,
    revision: u64,
    listeners: Vec<Listener>,
}

impl<S: KeyValueSlot, C: Clock> Wishlist<S, C> {
    pub fn open(slot: S, clock: C, config: &WishlistConfig) -> Self {
        let storage = StorageAdapter::new(slot, config.storage_key.clone());
        let (store, load_status) = ItemStore::open(storage, clock, config.min_name_len);
        Self {
            store,
            controller: ViewController::new(),
            load_status,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    /// Call `listener` after every state change. It receives no payload;
    /// re-pull `derive_view` and `stats` from the handle.
    pub fn subscribe(&mut self, listener: impl Fn() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn changed(&mut self) {
        self.revision += 1;
        for listener in &self.listeners {
            listener();
        }
    }

    // ========================
    // Read
    // ========================

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Increases by one per state change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.store.find(id)
    }

    pub fn find_index(&self, id: ItemId) -> Option<usize> {
        self.store.find_index(id)
    }

    pub fn view_state(&self) -> &ViewState {
        self.controller.state()
    }

    pub fn session(&self) -> EditSession {
        self.controller.session()
    }

    pub fn derive_view(&self) -> Vec<Item> {
        query::derive_view(self.store.items(), self.controller.state())
    }

    pub fn stats(&self) -> Stats {
        query::compute_stats(self.store.items())
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        query::empty_state(self.store.items(), self.controller.state())
    }

    /// Last failed write, reported once
    pub fn take_storage_error(&mut self) -> Option<StorageError> {
        self.store.take_storage_error()
    }

    // ========================
    // Item intents
    // ========================

    pub fn create(&mut self, draft: ItemDraft) -> DomainResult<Applied> {
        let item = self.store.create(draft)?;
        self.changed();
        Ok(Applied { item, notice: Notice::ItemAdded })
    }

    pub fn update(&mut self, id: ItemId, draft: ItemDraft) -> DomainResult<Applied> {
        let item = self.store.update(id, draft)?;
        self.changed();
        Ok(Applied { item, notice: Notice::ChangesSaved })
    }

    pub fn toggle_bought(&mut self, id: ItemId) -> DomainResult<Applied> {
        let item = self.store.toggle_bought(id)?;
        self.changed();
        Ok(Applied { item, notice: Notice::StatusUpdated })
    }

    /// Irreversible. Only call after the user confirmed.
    pub fn delete(&mut self, id: ItemId) -> DomainResult<Applied> {
        let item = self.store.delete(id)?;
        if self.controller.session().editing_id() == Some(id) {
            self.controller.end_session();
        }
        self.changed();
        Ok(Applied { item, notice: Notice::ItemDeleted })
    }

    // ========================
    // View intents
    // ========================

    pub fn set_filter(&mut self, filter: Filter) {
        self.controller.set_filter(filter);
        self.changed();
    }

    pub fn set_query(&mut self, query: &str) {
        self.controller.set_query(query);
        self.changed();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.controller.set_sort(sort);
        self.changed();
    }

    pub fn reset(&mut self) -> Notice {
        self.controller.reset();
        self.changed();
        Notice::FilterReset
    }

    // ========================
    // Edit session
    // ========================

    pub fn begin_edit(&mut self, id: ItemId) -> DomainResult<FormIntent> {
        let item = self.store.find(id).ok_or(DomainError::NotFound(id))?;
        let intent = self.controller.begin_edit(item);
        self.changed();
        Ok(intent)
    }

    pub fn begin_create(&mut self) -> FormIntent {
        let intent = self.controller.begin_create();
        self.changed();
        intent
    }

    pub fn end_session(&mut self) {
        self.controller.end_session();
        self.changed();
    }

    /// Save the open form. On a validation error the session stays open
    /// so the form can show it.
    pub fn submit(&mut self, draft: ItemDraft) -> DomainResult<Applied> {
        let applied = match self.controller.session() {
            EditSession::Closed => return Err(DomainError::NoActiveSession),
            EditSession::Creating => self.store.create(draft).map(|item| Applied {
                item,
                notice: Notice::ItemAdded,
            }),
            EditSession::Editing(id) => self.store.update(id, draft).map(|item| Applied {
                item,
                notice: Notice::ChangesSaved,
            }),
        };

        match applied {
            Ok(applied) => {
                self.controller.end_session();
                self.changed();
                Ok(applied)
            }
            Err(e @ DomainError::NotFound(_)) => {
                // The item vanished while its form was open
                self.controller.end_session();
                self.changed();
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
