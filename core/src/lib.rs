//! # TokenCache Core
//!
//! Core token logic for the TokenCache backend.
//! This crate contains the principal entity, the claim codec, the
//! set/delete management strategies, the token state store interface
//! and the error types that the transport and infrastructure layers build on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
