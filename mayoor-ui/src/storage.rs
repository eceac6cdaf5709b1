//! Persistent storage of the session token

use crate::config::DEFAULT_TOKEN_KEY;
use crate::error::StorageError;
use gloo_storage::{LocalStorage, Storage};

/// Durable home of the session token
pub trait TokenStorage {
    fn store_token(&self, token: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, one raw string under a fixed key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTokenStorage {
    key: String,
}

impl LocalTokenStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Token persisted by an earlier session, if any
    pub fn load_token(&self) -> Option<String> {
        LocalStorage::raw().get_item(&self.key).ok().flatten()
    }
}

impl Default for LocalTokenStorage {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_KEY)
    }
}

impl TokenStorage for LocalTokenStorage {
    // Written raw rather than through gloo's JSON encoding so other readers
    // of the key see the bare token.
    fn store_token(&self, token: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(&self.key, token)
            .map_err(|e| StorageError::Write {
                key: self.key.clone(),
                reason: format!("{:?}", e),
            })
    }
}
