//! Per-user auto-reply settings and reply selection
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0

use dashmap::DashMap;
use log::info;
use std::sync::Arc;

use super::pool::ResponsePool;
use crate::core::{OwnerId, ReminderError};

/// Custom auto-reply text keyed by user. No entry means "use the pool".
#[derive(Clone, Default)]
pub struct AutoReplyStore {
    custom: Arc<DashMap<OwnerId, String>>,
}

impl AutoReplyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, owner: OwnerId) -> Option<String> {
        self.custom.get(&owner).map(|entry| entry.value().clone())
    }

    pub fn set(&self, owner: OwnerId, text: String) {
        self.custom.insert(owner, text);
    }

    /// Returns whether a custom reply was present
    pub fn remove(&self, owner: OwnerId) -> bool {
        self.custom.remove(&owner).is_some()
    }
}

#[derive(Clone)]
pub struct AutoReplyPolicy {
    store: AutoReplyStore,
    pool: Arc<ResponsePool>,
}

impl AutoReplyPolicy {
    pub fn new(store: AutoReplyStore, pool: ResponsePool) -> Self {
        AutoReplyPolicy {
            store,
            pool: Arc::new(pool),
        }
    }

    pub fn set(&self, owner: OwnerId, text: &str) -> Result<String, ReminderError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ReminderError::EmptyAutoReplyText);
        }
        self.store.set(owner, text.to_string());
        info!("Auto-reply set for user {owner}");
        Ok(text.to_string())
    }

    /// Back to the default pool. Returns whether a custom reply was set.
    pub fn disable(&self, owner: OwnerId) -> bool {
        let removed = self.store.remove(owner);
        if removed {
            info!("Auto-reply disabled for user {owner}");
        }
        removed
    }

    pub fn custom(&self, owner: OwnerId) -> Option<String> {
        self.store.get(owner)
    }

    /// Reply to a plain message: the user's custom text verbatim, otherwise
    /// a random pool entry.
    pub fn reply_for(&self, owner: OwnerId) -> Option<String> {
        self.store
            .get(owner)
            .or_else(|| self.pool.pick().map(str::to_string))
    }
}
