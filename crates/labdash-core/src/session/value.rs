//! Typed handle on a single session key

use super::store::{SessionStore, StorageKey};
use crate::error::Result;
use std::sync::Arc;

/// One session entry with a textual default
///
/// Built once by whoever owns the store and handed to the component that
/// needs it.
#[derive(Clone)]
pub struct SessionValue {
    store: Arc<dyn SessionStore>,
    key: StorageKey,
    default: String,
}

impl SessionValue {
    pub fn new(store: Arc<dyn SessionStore>, key: StorageKey, default: impl Into<String>) -> Self {
        Self {
            store,
            key,
            default: default.into(),
        }
    }

    /// Key this value lives under
    pub fn key(&self) -> StorageKey {
        self.key
    }

    /// Value returned when nothing is stored
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// Stored value, or the default when absent or unreadable
    pub fn get(&self) -> String {
        match self.store.get(self.key.as_str()) {
            Ok(Some(value)) => value,
            Ok(None) => self.default.clone(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "session read failed, using default");
                self.default.clone()
            }
        }
    }

    /// Write a new value
    pub fn set(&self, value: &str) -> Result<()> {
        self.store.set(self.key.as_str(), value)
    }
}

impl std::fmt::Debug for SessionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionValue")
            .field("key", &self.key)
            .field("default", &self.default)
            .finish()
    }
}
