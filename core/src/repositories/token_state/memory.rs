//! In-memory implementation of TokenStateStore

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::StoreError;

use super::r#trait::TokenStateStore;

/// Message returned by every operation once the store has been closed
pub const CLOSED_MESSAGE: &str = "token store: client is closed";

/// Process-local token store
///
/// Backs the `memory` store backend and the test suites. Clones share the
/// same key set, so a handle kept by a test observes what the service wrote.
#[derive(Clone, Default)]
pub struct InMemoryTokenStore {
    keys: Arc<RwLock<HashSet<String>>>,
    closed: Arc<AtomicBool>,
}

impl InMemoryTokenStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the store; all later calls fail with [`StoreError::Unavailable`]
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    /// Whether [`close`](Self::close) has been called
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Number of keys currently present
    pub async fn len(&self) -> usize {
        self.keys.read().await.len()
    }

    /// Whether no key is present
    pub async fn is_empty(&self) -> bool {
        self.keys.read().await.is_empty()
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.is_closed() {
            return Err(StoreError::unavailable(CLOSED_MESSAGE));
        }
        Ok(())
    }
}

#[async_trait]
impl TokenStateStore for InMemoryTokenStore {
    async fn put(&self, key: &str) -> Result<(), StoreError> {
        self.ensure_open()?;
        let inserted = self.keys.write().await.insert(key.to_string());
        debug!(inserted, "Stored token key in memory");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.ensure_open()?;
        let removed = self.keys.write().await.remove(key);
        debug!(removed, "Removed token key from memory");
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.ensure_open()?;
        Ok(self.keys.read().await.contains(key))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.ensure_open()
    }
}
