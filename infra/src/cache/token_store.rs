//! Redis-backed implementation of the token state store
//!
//! A token is active while its key exists. Keys are the raw token string,
//! optionally prefixed via `CacheConfig::key_prefix`; values carry no
//! meaning and no expiry is set.

use async_trait::async_trait;
use tracing::info;

use tc_core::errors::StoreError;
use tc_core::repositories::TokenStateStore;

use crate::cache::redis_client::{mask_key, RedisClient};

/// Value written for present tokens
pub const PRESENT_MARKER: &str = "1";

const UNEXPECTED_PING_REPLY: &str = "redis: unexpected reply to PING";

/// Token state store over a shared Redis connection
#[derive(Clone)]
pub struct RedisTokenStore {
    client: RedisClient,
}

impl RedisTokenStore {
    /// Create a token store using the given Redis client
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn key(&self, token: &str) -> String {
        self.client.config().make_key(token)
    }
}

#[async_trait]
impl TokenStateStore for RedisTokenStore {
    async fn put(&self, key: &str) -> Result<(), StoreError> {
        self.client.set(&self.key(key), PRESENT_MARKER).await?;
        info!("Token '{}' marked active", mask_key(key));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let existed = self.client.delete(&self.key(key)).await?;
        info!("Token '{}' removed (existed: {})", mask_key(key), existed);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.client.exists(&self.key(key)).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.client.health_check().await? {
            Ok(())
        } else {
            Err(StoreError::unavailable(UNEXPECTED_PING_REPLY))
        }
    }
}
