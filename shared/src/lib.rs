//! Shared configuration for the TokenCache server
//!
//! This crate provides the configuration types used across all server crates:
//! server binding, token store backend selection, environment and logging.

pub mod config;

// Re-export commonly used items at crate root
pub use crate::config::{
    AppConfig, CacheConfig, CacheStrategyConfig, CacheType, ConfigError, Environment,
    LogFormat, LoggingConfig, ServerConfig,
};
