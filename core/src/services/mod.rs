//! Business services containing the token logic.

pub mod token;

// Re-export commonly used types
pub use token::{ClaimCodec, ManagementStrategy, TokenService, TokenServiceConfig};
