//! Main token service implementation

use tracing::{debug, info, warn};

use crate::domain::entities::principal::Principal;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::TokenStateStore;

use super::codec::ClaimCodec;
use super::config::TokenServiceConfig;
use super::strategy::ManagementStrategy;

/// Characters of a token kept when it appears in logs
const LOGGED_TOKEN_PREFIX: usize = 8;

/// Service orchestrating the claim codec and the token state store
///
/// Holds no mutable state of its own; every operation is a single
/// request/response call and may run concurrently with any other.
pub struct TokenService<S: TokenStateStore> {
    store: S,
    codec: ClaimCodec,
}

impl<S: TokenStateStore> TokenService<S> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `store` - Token state store; its lifecycle stays with the caller
    /// * `config` - Signing configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService` instance or error if the algorithm is not usable
    /// with a shared secret
    pub fn new(store: S, config: TokenServiceConfig) -> Result<Self, DomainError> {
        let codec = ClaimCodec::from_config(&config)?;
        info!(algorithm = ?codec.algorithm(), nonce_claim = %config.nonce_claim, "Token service created");

        Ok(Self { store, codec })
    }

    /// The underlying token state store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Signs a principal into a token
    ///
    /// # Arguments
    ///
    /// * `principal` - Identity to embed
    /// * `secret` - Signing secret supplied by the caller for this call only
    pub fn generate_token(&self, principal: &Principal, secret: &[u8]) -> DomainResult<String> {
        let token = self.codec.generate(principal, secret)?;
        debug!(principal_id = principal.id, token = %mask_token(&token), "Generated token");
        Ok(token)
    }

    /// Verifies a token and returns the principal it carries
    ///
    /// # Returns
    ///
    /// * `Ok(Principal)` - Signature valid and all claims well typed
    /// * `Err(DomainError)` - Malformed token, bad signature or foreign
    ///   signing method, or a claim of the wrong type
    pub fn extract_token(&self, token: &str, secret: &[u8]) -> DomainResult<Principal> {
        self.codec.extract(token, secret).map_err(|e| {
            debug!(token = %mask_token(token), error = %e, "Token extraction failed");
            DomainError::from(e)
        })
    }

    /// Applies a set or delete strategy for `token` to the state store
    ///
    /// Any string is a valid key, including the empty string.
    pub async fn manage_token(&self, strategy: ManagementStrategy, token: &str) -> DomainResult<()> {
        match strategy.apply(&self.store, token).await {
            Ok(()) => {
                info!(%strategy, token = %mask_token(token), "Token state updated");
                Ok(())
            }
            Err(e) => {
                warn!(%strategy, token = %mask_token(token), error = %e, "Token state update failed");
                Err(e.into())
            }
        }
    }

    /// Reports whether `token` is currently present in the state store
    pub async fn check_token(&self, token: &str) -> DomainResult<bool> {
        let present = self.store.exists(token).await.map_err(|e| {
            warn!(token = %mask_token(token), error = %e, "Token state check failed");
            DomainError::from(e)
        })?;

        debug!(token = %mask_token(token), present, "Checked token state");
        Ok(present)
    }

    /// Reports whether the state store backend is reachable
    pub async fn ping_store(&self) -> DomainResult<()> {
        self.store.ping().await.map_err(|e| {
            warn!(error = %e, "Token store ping failed");
            DomainError::from(e)
        })
    }
}

/// Shortens a token for log output
pub(crate) fn mask_token(token: &str) -> String {
    let prefix: String = token.chars().take(LOGGED_TOKEN_PREFIX).collect();
    if prefix.len() < token.len() {
        format!("{}...", prefix)
    } else {
        prefix
    }
}
