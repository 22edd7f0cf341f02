//! Cache module for Redis-based token state
//!
//! This module provides the Redis connection wrapper and the token state
//! store built on top of it.

pub mod redis_client;
pub mod token_store;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;
pub use token_store::{RedisTokenStore, PRESENT_MARKER};

// Re-export commonly used types
pub use tc_shared::config::cache::CacheConfig;
