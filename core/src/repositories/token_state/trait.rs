//! Token state store trait defining the interface to the key-value backend
//! that records which tokens are currently active.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::StoreError;

/// Repository trait for token presence in an external key-value store
///
/// Presence is binary: a key is either stored or not, with no payload and
/// no expiry set by this layer. Every method may fail only because the
/// backend is unreachable or closed; "not found" is never an error.
///
/// Implementations are shared across concurrent requests and rely on the
/// backend for atomicity of individual calls.
#[async_trait]
pub trait TokenStateStore: Send + Sync {
    /// Record presence of `key`
    ///
    /// # Returns
    /// * `Ok(())` - Key is present (repeated puts also succeed)
    /// * `Err(StoreError)` - Backend unavailable
    async fn put(&self, key: &str) -> Result<(), StoreError>;

    /// Remove `key`
    ///
    /// # Returns
    /// * `Ok(())` - Key is absent, whether or not it existed before
    /// * `Err(StoreError)` - Backend unavailable
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check whether `key` is present
    ///
    /// # Returns
    /// * `Ok(true)` - Key was put and not deleted since
    /// * `Ok(false)` - Key was never put, or was deleted
    /// * `Err(StoreError)` - Backend unavailable
    async fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// Check that the backend answers, without touching any key
    async fn ping(&self) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: TokenStateStore + ?Sized> TokenStateStore for Arc<T> {
    async fn put(&self, key: &str) -> Result<(), StoreError> {
        (**self).put(key).await
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key).await
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        (**self).exists(key).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        (**self).ping().await
    }
}
