//! Principal entity encoded into identity tokens.

use serde::{Deserialize, Serialize};

/// Claim name holding the principal id
pub const CLAIM_ID: &str = "id";

/// Claim name holding the principal username
pub const CLAIM_USERNAME: &str = "username";

/// Claim name holding the principal email
pub const CLAIM_EMAIL: &str = "email";

/// Identity payload embedded in a token
///
/// No uniqueness is enforced here; callers that need unique principals
/// must guarantee it themselves. `Principal::default()` is the zero value
/// reported alongside a failed extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl Principal {
    /// Creates a new principal
    pub fn new(id: i64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }
}
