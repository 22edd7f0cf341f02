//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for TokenCache.
//! It provides the Redis client and the Redis-backed implementation of the
//! core `TokenStateStore` trait.
//!
//! ## Features
//!
//! - `redis-cache`: Enable the Redis async connection support (default)

use tc_core::errors::StoreError;

/// Cache module - Redis client and token state store
pub mod cache;

pub use cache::{RedisClient, RedisTokenStore};

/// Connect to Redis and build the token state store
///
/// Connection attempts are retried with exponential backoff according to
/// `config.connect_retries`; the returned store never retries on its own.
pub async fn connect_token_store(
    config: tc_shared::CacheConfig,
) -> Result<RedisTokenStore, InfrastructureError> {
    tracing::info!("Initializing Redis token store...");

    let client = RedisClient::new(config).await?;

    tracing::info!("Redis token store initialized successfully");
    Ok(RedisTokenStore::new(client))
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for StoreError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            // Backend text is passed through untouched
            InfrastructureError::Cache(e) => StoreError::unavailable(e.to_string()),
            InfrastructureError::Config(message) => StoreError::unavailable(message),
        }
    }
}
