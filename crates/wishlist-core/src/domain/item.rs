//! Item Entity
//!
//! One wishlist entry plus the draft payload used to create or edit it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::entity::ValidationError;

pub type ItemId = u64;

/// Floor for the name length check; settings can raise it, never lower it
pub const MIN_NAME_LEN: usize = 2;

/// How badly the item is wanted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Unknown values fall back to the default, like a `<select>` would.
    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }

    /// Sort rank, higher is more urgent
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// A persisted wishlist entry
///
/// Field names are camelCase on disk so payloads written by older
/// builds of the page still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, deserialize_with = "price_or_zero")]
    pub price: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub bought: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Older pages wrote `null` for prices that weren't numbers
fn price_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl Item {
    /// Build a fresh, unbought item from a validated draft
    pub fn new(id: ItemId, draft: ValidatedDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            priority: draft.priority,
            price: draft.price,
            notes: draft.notes,
            url: draft.url,
            bought: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every mutable field. `bought` is only touched if the draft carries it.
    pub fn apply(&mut self, draft: ValidatedDraft, now: DateTime<Utc>) {
        self.name = draft.name;
        self.priority = draft.priority;
        self.price = draft.price;
        self.notes = draft.notes;
        self.url = draft.url;
        if let Some(bought) = draft.bought {
            self.bought = bought;
        }
        self.touch(now);
    }

    pub fn toggle_bought(&mut self, now: DateTime<Utc>) {
        self.bought = !self.bought;
        self.touch(now);
    }

    /// Refresh `updated_at`. Never moves backwards, so `created_at <= updated_at`
    /// holds even if the wall clock is adjusted.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.updated_at);
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }

    pub fn has_url(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

/// Unvalidated create/update payload straight from the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub priority: Option<Priority>,
    pub price: Option<f64>,
    pub notes: Option<String>,
    pub url: Option<String>,
    /// Only honoured by update
    pub bought: Option<bool>,
}

impl ItemDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn bought(mut self, bought: bool) -> Self {
        self.bought = Some(bought);
        self
    }

    /// Pre-populate a draft from an existing item (edit form)
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            priority: Some(item.priority),
            price: Some(item.price),
            notes: Some(item.notes.clone()),
            url: Some(item.url.clone()),
            bought: Some(item.bought),
        }
    }

    /// Trim text, apply defaults and check the invariants.
    pub fn validate(self, min_name_len: usize) -> Result<ValidatedDraft, ValidationError> {
        let min_name_len = min_name_len.max(MIN_NAME_LEN);
        let name = self.name.trim().to_string();
        if name.chars().count() < min_name_len {
            return Err(ValidationError::NameTooShort { min: min_name_len });
        }

        let price = self.price.unwrap_or(0.0);
        if !price.is_finite() || price < 0.0 {
            return Err(ValidationError::InvalidPrice);
        }

        Ok(ValidatedDraft {
            name,
            priority: self.priority.unwrap_or_default(),
            price,
            notes: self.notes.unwrap_or_default().trim().to_string(),
            url: self.url.unwrap_or_default().trim().to_string(),
            bought: self.bought,
        })
    }
}

/// A draft that passed validation, with every default filled in
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft {
    pub name: String,
    pub priority: Priority,
    pub price: f64,
    pub notes: String,
    pub url: String,
    pub bought: Option<bool>,
}
