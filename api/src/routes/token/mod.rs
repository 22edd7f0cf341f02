//! Token route handlers
//!
//! - `POST /generate` - sign a principal into a token
//! - `POST /extract` - verify a token and return its principal
//! - `POST /token`, `DELETE /token` - add or remove a token from the state store
//! - `POST /check` - report whether a token is active
//!
//! Service failures are reported in the `err` field of a 200 response.

pub mod check;
pub mod extract;
pub mod generate;
pub mod manage;

use std::sync::Arc;

use tc_core::repositories::TokenStateStore;
use tc_core::services::TokenService;

/// Application state shared by all token handlers
pub struct AppState<S>
where
    S: TokenStateStore,
{
    pub token_service: Arc<TokenService<S>>,
}

impl<S: TokenStateStore> AppState<S> {
    pub fn new(token_service: TokenService<S>) -> Self {
        Self {
            token_service: Arc::new(token_service),
        }
    }
}

impl<S: TokenStateStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            token_service: Arc::clone(&self.token_service),
        }
    }
}
