//! Token service module
//!
//! This module handles all token-related operations:
//! - Signing a principal into an HS256 token with a per-issue nonce
//! - Verifying a token and extracting its principal with strict claim typing
//! - Adding or removing a token in the state store (set / delete strategies)
//! - Checking whether a token is currently active

mod codec;
mod config;
mod service;
mod strategy;

#[cfg(test)]
mod tests;

pub use codec::ClaimCodec;
pub use config::{TokenServiceConfig, DEFAULT_NONCE_CLAIM};
pub use service::TokenService;
pub use strategy::ManagementStrategy;
