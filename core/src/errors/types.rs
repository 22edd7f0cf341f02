//! Error types for token codec and token state store operations

use thiserror::Error;

/// Message reported by parsers when a token does not have three segments
pub const INVALID_SEGMENTS_MESSAGE: &str = "token contains an invalid number of segments";

/// Token encoding, decoding and claim validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Token cannot be parsed into header, payload and signature
    #[error("{reason}")]
    Malformed { reason: String },

    /// Token header declares an algorithm other than the one this codec accepts
    #[error("unexpected signing method: {algorithm}")]
    UnexpectedSigningMethod { algorithm: String },

    /// Signature does not verify against the provided secret
    #[error("signature is invalid")]
    InvalidSignature,

    /// A required claim is missing or has the wrong JSON type
    #[error("claims['{claim}'] wrong type")]
    ClaimType { claim: &'static str },

    /// Codec configured with an algorithm it cannot sign with a shared secret
    #[error("unsupported signing algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },

    #[error("token generation failed: {reason}")]
    GenerationFailed { reason: String },
}

impl TokenError {
    /// Malformed-token error for a wrong segment count
    pub fn invalid_segments() -> Self {
        TokenError::Malformed {
            reason: INVALID_SEGMENTS_MESSAGE.to_string(),
        }
    }

    /// Whether this error belongs to signature verification
    pub fn is_signature_error(&self) -> bool {
        matches!(
            self,
            TokenError::InvalidSignature | TokenError::UnexpectedSigningMethod { .. }
        )
    }
}

/// Token state store errors
///
/// The backend message is kept verbatim so callers see exactly what the
/// store reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{message}")]
    Unavailable { message: String },
}

impl StoreError {
    /// Creates an unavailable-backend error from any message
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable {
            message: message.into(),
        }
    }
}
