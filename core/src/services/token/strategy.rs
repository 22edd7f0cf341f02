//! Set / delete strategies applied to the token state store

use std::fmt;

use crate::errors::StoreError;
use crate::repositories::TokenStateStore;

/// The mutation to apply to a token's stored state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagementStrategy {
    /// Ensure the token is present
    Set,
    /// Ensure the token is absent
    Delete,
}

impl ManagementStrategy {
    /// Applies this mutation for `key` to `store`
    pub async fn apply<S>(self, store: &S, key: &str) -> Result<(), StoreError>
    where
        S: TokenStateStore + ?Sized,
    {
        match self {
            ManagementStrategy::Set => store.put(key).await,
            ManagementStrategy::Delete => store.delete(key).await,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ManagementStrategy::Set => "set",
            ManagementStrategy::Delete => "delete",
        }
    }
}

impl fmt::Display for ManagementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
