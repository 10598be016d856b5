//! Form State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity of the
//! add/edit form, so typing in one input doesn't re-render the others.

use leptos::prelude::*;
use reactive_stores::Store;
use wishlist_core::{FormIntent, ItemDraft, Priority, ValidationError};

use crate::format::parse_price;

/// Raw input values of the add/edit form
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    pub name: String,
    pub priority: Priority,
    /// Kept as typed; parsed on submit
    pub price: String,
    pub notes: String,
    pub url: String,
    pub bought: bool,
    /// Bought checkbox only exists while editing
    pub show_bought: bool,
    /// Form-level validation message
    pub error: Option<String>,
}

impl FormState {
    /// Values the form opens with for a session
    pub fn for_intent(intent: &FormIntent) -> Self {
        match intent {
            FormIntent::Create => Self::default(),
            FormIntent::Edit(item) => Self {
                name: item.name.clone(),
                priority: item.priority,
                price: if item.price > 0.0 { item.price.to_string() } else { String::new() },
                notes: item.notes.clone(),
                url: item.url.clone(),
                bought: item.bought,
                show_bought: true,
                error: None,
            },
        }
    }

    /// Turn the inputs into a draft. An unparseable price becomes NaN so
    /// the store rejects it like any other bad price.
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            name: self.name.clone(),
            priority: Some(self.priority),
            price: Some(parse_price(&self.price).unwrap_or(f64::NAN)),
            notes: Some(self.notes.clone()),
            url: Some(self.url.clone()),
            bought: self.show_bought.then_some(self.bought),
        }
    }
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

pub fn error_message(error: &ValidationError) -> String {
    match error {
        ValidationError::NameTooShort { min } => format!("Name must be at least {} characters.", min),
        ValidationError::InvalidPrice => "Price must be a number, zero or more.".to_string(),
    }
}

// ========================
// Store Helper Functions
// ========================

/// Replace every field for a new session
pub fn store_open_form(store: &FormStore, intent: &FormIntent) {
    *store.write() = FormState::for_intent(intent);
}

pub fn store_set_error(store: &FormStore, error: &ValidationError) {
    *store.error().write() = Some(error_message(error));
}

pub fn store_draft(store: &FormStore) -> ItemDraft {
    store.read_untracked().to_draft()
}
