//! Domain error types and error handling.

mod types;


pub use types::{StoreError, TokenError, INVALID_SEGMENTS_MESSAGE};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Request value did not match the operation's expected shape
    #[error("error to request: {message}")]
    RequestShape { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DomainError {
    /// Stable machine-readable code for logs and clients
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::RequestShape { .. } => "REQUEST_SHAPE",
            DomainError::Token(token_error) => match token_error {
                TokenError::Malformed { .. } => "TOKEN_MALFORMED",
                TokenError::UnexpectedSigningMethod { .. } | TokenError::InvalidSignature => {
                    "SIGNATURE_INVALID"
                }
                TokenError::ClaimType { .. } => "CLAIM_TYPE",
                TokenError::UnsupportedAlgorithm { .. } => "UNSUPPORTED_ALGORITHM",
                TokenError::GenerationFailed { .. } => "TOKEN_GENERATION_FAILED",
            },
            DomainError::Store(StoreError::Unavailable { .. }) => "BACKEND_UNAVAILABLE",
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
