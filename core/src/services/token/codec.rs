//! Claim codec: signs principals into tokens and validates them back

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::domain::entities::principal::{Principal, CLAIM_EMAIL, CLAIM_ID, CLAIM_USERNAME};
use crate::errors::TokenError;

use super::config::{TokenServiceConfig, DEFAULT_NONCE_CLAIM};

type ClaimMap = Map<String, Value>;

/// Header field naming the signing method
const HEADER_ALGORITHM: &str = "alg";

/// Encodes principals into signed tokens and decodes them with strict checks
///
/// The codec accepts exactly one symmetric algorithm. Tokens are decoded
/// into a generic claim map and every claim type is checked explicitly.
#[derive(Debug, Clone)]
pub struct ClaimCodec {
    algorithm: Algorithm,
    nonce_claim: String,
    validation: Validation,
}

impl ClaimCodec {
    /// Creates a codec for a single HMAC algorithm
    ///
    /// # Errors
    ///
    /// `TokenError::UnsupportedAlgorithm` for asymmetric algorithms, which
    /// cannot be used with a per-request shared secret.
    pub fn new(algorithm: Algorithm) -> Result<Self, TokenError> {
        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(TokenError::UnsupportedAlgorithm {
                algorithm: format!("{:?}", algorithm),
            });
        }

        // Tokens carry no registered claims, so only the signature is checked.
        let mut validation = Validation::new(algorithm);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_aud = false;

        Ok(Self {
            algorithm,
            nonce_claim: DEFAULT_NONCE_CLAIM.to_string(),
            validation,
        })
    }

    /// Creates a codec from service configuration
    pub fn from_config(config: &TokenServiceConfig) -> Result<Self, TokenError> {
        Ok(Self::new(config.algorithm)?.with_nonce_claim(config.nonce_claim.clone()))
    }

    /// Overrides the claim name used for the nonce
    pub fn with_nonce_claim(mut self, nonce_claim: impl Into<String>) -> Self {
        self.nonce_claim = nonce_claim.into();
        self
    }

    /// The only algorithm this codec signs with and accepts
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Signs `principal` into a token
    ///
    /// A fresh v4 UUID is added under the nonce claim, so two calls with the
    /// same principal and secret never return the same token. An empty
    /// secret is accepted; secret policy belongs to the caller.
    pub fn generate(&self, principal: &Principal, secret: &[u8]) -> Result<String, TokenError> {
        let mut claims = ClaimMap::new();
        claims.insert(CLAIM_ID.to_string(), Value::from(principal.id));
        claims.insert(CLAIM_USERNAME.to_string(), Value::from(principal.username.as_str()));
        claims.insert(CLAIM_EMAIL.to_string(), Value::from(principal.email.as_str()));
        claims.insert(self.nonce_claim.clone(), Value::from(Uuid::new_v4().to_string()));

        encode(
            &Header::new(self.algorithm),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .map_err(|e| TokenError::GenerationFailed {
            reason: e.to_string(),
        })
    }

    /// Verifies `token` with `secret` and returns its principal
    ///
    /// Structural problems are reported before the signature, and the
    /// signature before any claim. Claims are checked in the order
    /// `id`, `username`, `email`; the first failure wins.
    pub fn extract(&self, token: &str, secret: &[u8]) -> Result<Principal, TokenError> {
        let key = self.resolve_key(token, secret)?;
        let data = decode::<ClaimMap>(token, &key, &self.validation).map_err(map_jwt_error)?;

        principal_from_claims(&data.claims)
    }

    /// Selects the verification key for `token`
    ///
    /// Fails with `UnexpectedSigningMethod` when the header names any
    /// algorithm but the configured one, before the secret is used. The
    /// header's `alg` is compared as a raw string, so `none` and names
    /// unknown to `jsonwebtoken` are rejected the same way.
    pub fn resolve_key(&self, token: &str, secret: &[u8]) -> Result<DecodingKey, TokenError> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return Err(TokenError::invalid_segments());
        }

        let declared = header_algorithm(segments[0])?;
        if declared != format!("{:?}", self.algorithm) {
            return Err(TokenError::UnexpectedSigningMethod {
                algorithm: declared,
            });
        }

        Ok(DecodingKey::from_secret(secret))
    }
}

/// Reads the raw `alg` value from a token's header segment
fn header_algorithm(segment: &str) -> Result<String, TokenError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| TokenError::Malformed {
            reason: format!("illegal base64 data: {}", e),
        })?;

    let header: ClaimMap = serde_json::from_slice(&bytes).map_err(|e| TokenError::Malformed {
        reason: format!("invalid token json: {}", e),
    })?;

    match header.get(HEADER_ALGORITHM) {
        Some(Value::String(algorithm)) => Ok(algorithm.clone()),
        _ => Err(TokenError::Malformed {
            reason: "token header has no signing method".to_string(),
        }),
    }
}

/// Reads the principal out of a verified claim map
fn principal_from_claims(claims: &ClaimMap) -> Result<Principal, TokenError> {
    let id = claims
        .get(CLAIM_ID)
        .and_then(numeric_claim)
        .ok_or(TokenError::ClaimType { claim: CLAIM_ID })?;

    let username = claims
        .get(CLAIM_USERNAME)
        .and_then(Value::as_str)
        .ok_or(TokenError::ClaimType { claim: CLAIM_USERNAME })?;

    let email = claims
        .get(CLAIM_EMAIL)
        .and_then(Value::as_str)
        .ok_or(TokenError::ClaimType { claim: CLAIM_EMAIL })?;

    Ok(Principal::new(id, username, email))
}

/// Any JSON number is accepted; fractional values are truncated
fn numeric_claim(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
}

fn map_jwt_error(error: JwtError) -> TokenError {
    match error.kind() {
        ErrorKind::InvalidToken => TokenError::invalid_segments(),
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::InvalidAlgorithm => TokenError::UnexpectedSigningMethod {
            algorithm: "unknown".to_string(),
        },
        ErrorKind::Base64(e) => TokenError::Malformed {
            reason: format!("illegal base64 data: {}", e),
        },
        ErrorKind::Json(e) => TokenError::Malformed {
            reason: format!("invalid token json: {}", e),
        },
        _ => TokenError::Malformed {
            reason: error.to_string(),
        },
    }
}
