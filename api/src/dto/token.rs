use serde::{Deserialize, Serialize};
use tc_core::Principal;

/// Body of `POST /generate`
///
/// Missing fields decode to their zero value; only malformed JSON or
/// wrongly typed fields are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateTokenRequest {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Signing secret used for this request only
    pub secret: String,
}

impl GenerateTokenRequest {
    pub fn principal(&self) -> Principal {
        Principal::new(self.id, self.username.clone(), self.email.clone())
    }
}

/// Body of `POST /extract`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSecretRequest {
    pub token: String,
    pub secret: String,
}

/// Body of `POST /token`, `DELETE /token` and `POST /check`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenRequest {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Extraction result; on failure the principal fields are zero values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub err: String,
}

impl PrincipalResponse {
    pub fn new(principal: Principal, err: String) -> Self {
        Self {
            id: principal.id,
            username: principal.username,
            email: principal.email,
            err,
        }
    }
}

/// Outcome of a set/delete, or a rejected request; `err` is empty on success
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub err: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    pub check: bool,
    pub err: String,
}
