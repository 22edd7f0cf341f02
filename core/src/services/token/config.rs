//! Configuration for the token service

use jsonwebtoken::Algorithm;

/// Claim carrying the random per-issue nonce
pub const DEFAULT_NONCE_CLAIM: &str = "uuid";

/// Configuration for the token service
///
/// The signing secret is deliberately absent: it arrives with every
/// request and is never stored.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// The single JWT algorithm accepted for signing and verification
    pub algorithm: Algorithm,
    /// Claim name for the nonce that makes each issued token unique
    pub nonce_claim: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::HS256,
            nonce_claim: DEFAULT_NONCE_CLAIM.to_string(),
        }
    }
}
