//! View-State Controller
//!
//! Owns the filter/search/sort state and the single edit session.
//! It never renders; callers re-derive the view after each transition.

use crate::domain::{Filter, Item, ItemId, SortMode, ViewState};

/// Which form, if any, is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Closed,
    Creating,
    Editing(ItemId),
}

impl EditSession {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditSession::Closed)
    }

    pub fn editing_id(&self) -> Option<ItemId> {
        match self {
            EditSession::Editing(id) => Some(*id),
            _ => None,
        }
    }
}

/// What the form should show when a session starts
#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    /// Empty form, bought checkbox hidden
    Create,
    /// Form pre-filled from the item, bought checkbox shown
    Edit(Item),
}

#[derive(Debug, Clone, Default)]
pub struct ViewController {
    state: ViewState,
    session: EditSession,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn session(&self) -> EditSession {
        self.session
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.state.filter = filter;
    }

    /// Stores the search text trimmed and lowercased
    pub fn set_query(&mut self, query: &str) {
        self.state.query = ViewState::normalize_query(query);
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.state.sort = sort;
    }

    /// Back to all / "" / newest in one step
    pub fn reset(&mut self) {
        self.state = ViewState::default();
    }

    /// Open the edit form for `item`, replacing any open session.
    /// The caller looks the item up so stale ids never open a form.
    pub fn begin_edit(&mut self, item: &Item) -> FormIntent {
        self.session = EditSession::Editing(item.id);
        FormIntent::Edit(item.clone())
    }

    pub fn begin_create(&mut self) -> FormIntent {
        self.session = EditSession::Creating;
        FormIntent::Create
    }

    pub fn end_session(&mut self) {
        self.session = EditSession::Closed;
    }
}
