//! Request and response bodies

pub mod token;

pub use token::{
    CheckResponse, ErrorResponse, GenerateTokenRequest, PrincipalResponse, TokenRequest,
    TokenResponse, TokenSecretRequest,
};
