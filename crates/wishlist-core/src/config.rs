//! Settings
//!
//! Every field has a default, so an empty or partial JSON object is a
//! valid settings payload.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainResult, StorageError, MIN_NAME_LEN};
use crate::repository::KeyValueSlot;

/// Storage key holding optional JSON overrides for [`WishlistConfig`]
pub const SETTINGS_KEY: &str = "WISHLIST_SETTINGS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WishlistConfig {
    /// Slot the item collection is persisted under
    pub storage_key: String,
    /// Minimum trimmed name length in characters, never below [`MIN_NAME_LEN`]
    pub min_name_len: usize,
    /// How long a toast stays visible
    pub toast_ms: u32,
    /// Delay before the name input is focused after the form opens
    pub focus_delay_ms: u32,
    /// `log` level filter: off, error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for WishlistConfig {
    fn default() -> Self {
        Self {
            storage_key: "WISHLIST".to_string(),
            min_name_len: MIN_NAME_LEN,
            toast_ms: 1400,
            focus_delay_ms: 50,
            log_level: "info".to_string(),
        }
    }
}

impl WishlistConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let mut config: Self = serde_json::from_str(json).map_err(|e| StorageError::Malformed {
            key: SETTINGS_KEY.to_string(),
            reason: e.to_string(),
        })?;
        if config.min_name_len < MIN_NAME_LEN {
            log::warn!("[CONFIG] min_name_len {} raised to {}", config.min_name_len, MIN_NAME_LEN);
            config.min_name_len = MIN_NAME_LEN;
        }
        Ok(config)
    }

    /// Read overrides from `slot`. Missing settings mean defaults; broken
    /// settings are logged and also mean defaults.
    pub fn load_from(slot: &impl KeyValueSlot) -> Self {
        match slot.read(SETTINGS_KEY) {
            Ok(Some(json)) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("[CONFIG] ignoring settings: {}", e);
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("[CONFIG] settings unreadable: {}", e);
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
