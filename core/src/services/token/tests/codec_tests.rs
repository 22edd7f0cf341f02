//! Unit tests for the claim codec

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;

use crate::domain::entities::principal::Principal;
use crate::errors::{TokenError, INVALID_SEGMENTS_MESSAGE};
use crate::services::token::{ClaimCodec, TokenServiceConfig};

const SECRET: &[u8] = b"secret";

fn codec() -> ClaimCodec {
    ClaimCodec::new(Algorithm::HS256).expect("HS256 codec")
}

fn principal() -> Principal {
    Principal::new(1, "username", "email@email.com")
}

fn sign(claims: serde_json::Value, algorithm: Algorithm, secret: &[u8]) -> String {
    encode(&Header::new(algorithm), &claims, &EncodingKey::from_secret(secret)).unwrap()
}

#[test]
fn test_generate_uses_hs256_header() {
    let token = codec().generate(&principal(), SECRET).unwrap();

    let header = jsonwebtoken::decode_header(&token).unwrap();
    assert_eq!(header.alg, Algorithm::HS256);
    assert_eq!(token.split('.').count(), 3);
}

#[test]
fn test_round_trip() {
    let codec = codec();
    let token = codec.generate(&principal(), SECRET).unwrap();

    assert_eq!(codec.extract(&token, SECRET).unwrap(), principal());
}

#[test]
fn test_round_trip_preserves_negative_and_large_ids() {
    let codec = codec();
    for id in [0, -42, i64::from(i32::MAX) * 4] {
        let principal = Principal::new(id, "name", "mail@example.org");
        let token = codec.generate(&principal, SECRET).unwrap();
        assert_eq!(codec.extract(&token, SECRET).unwrap(), principal);
    }
}

#[test]
fn test_generate_is_unique_per_call() {
    let codec = codec();
    let first = codec.generate(&principal(), SECRET).unwrap();
    let second = codec.generate(&principal(), SECRET).unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_generate_embeds_nonce_claim() {
    let codec = codec().with_nonce_claim("jti");
    let token = codec.generate(&principal(), SECRET).unwrap();

    let mut validation = jsonwebtoken::Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    let data = jsonwebtoken::decode::<serde_json::Value>(
        &token,
        &jsonwebtoken::DecodingKey::from_secret(SECRET),
        &validation,
    )
    .unwrap();

    let nonce = data.claims["jti"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(nonce).is_ok());
}

#[test]
fn test_empty_secret_still_produces_token() {
    let codec = codec();
    let token = codec.generate(&principal(), b"").unwrap();

    assert_eq!(codec.extract(&token, b"").unwrap(), principal());
}

#[test]
fn test_wrong_secret_is_signature_error() {
    let codec = codec();
    let token = codec.generate(&principal(), b"secret-one").unwrap();

    let error = codec.extract(&token, b"secret-two").unwrap_err();
    assert_eq!(error, TokenError::InvalidSignature);
    assert_eq!(error.to_string(), "signature is invalid");
}

#[test]
fn test_empty_token_is_segment_error() {
    let error = codec().extract("", SECRET).unwrap_err();

    assert_eq!(error.to_string(), INVALID_SEGMENTS_MESSAGE);
    assert!(!matches!(error, TokenError::ClaimType { .. }));
}

#[test]
fn test_wrong_segment_counts() {
    let codec = codec();
    for token in ["token", "a.b", "a.b.c.d"] {
        let error = codec.extract(token, SECRET).unwrap_err();
        assert_eq!(error, TokenError::invalid_segments(), "token {:?}", token);
    }
}

#[test]
fn test_bad_base64_is_malformed() {
    let error = codec().extract("!!!.###.$$$", SECRET).unwrap_err();
    assert!(matches!(error, TokenError::Malformed { .. }));
}

#[test]
fn test_foreign_signing_method_is_rejected_before_verification() {
    let codec = codec();
    let token = sign(
        json!({"id": 1, "username": "username", "email": "email@email.com"}),
        Algorithm::HS512,
        SECRET,
    );

    let error = codec.extract(&token, SECRET).unwrap_err();
    assert_eq!(
        error,
        TokenError::UnexpectedSigningMethod {
            algorithm: "HS512".to_string()
        }
    );
    assert!(error.is_signature_error());
}

#[test]
fn test_resolve_key_rejects_foreign_header() {
    // Header {"alg":"PS256","typ":"JWT"}; payload and signature are never read
    let header = "eyJhbGciOiJQUzI1NiIsInR5cCI6IkpXVCJ9";
    let token = format!("{}.e30.c2ln", header);

    let error = codec().resolve_key(&token, SECRET).err().unwrap();
    assert_eq!(
        error,
        TokenError::UnexpectedSigningMethod {
            algorithm: "PS256".to_string()
        }
    );
}

#[test]
fn test_none_algorithm_is_unexpected_signing_method() {
    // Header {"alg":"none","typ":"JWT"} with an empty signature
    let token = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.eyJpZCI6MSwidXNlcm5hbWUiOiJ1IiwiZW1haWwiOiJlIn0.";

    let error = codec().extract(token, SECRET).unwrap_err();
    assert_eq!(
        error,
        TokenError::UnexpectedSigningMethod {
            algorithm: "none".to_string()
        }
    );
    assert!(error.is_signature_error());
}

#[test]
fn test_unknown_algorithm_name_is_unexpected_signing_method() {
    // Header {"alg":"HS999"}
    let token = "eyJhbGciOiJIUzk5OSJ9.e30.c2ln";

    let error = codec().resolve_key(token, SECRET).err().unwrap();
    assert_eq!(
        error,
        TokenError::UnexpectedSigningMethod {
            algorithm: "HS999".to_string()
        }
    );
}

#[test]
fn test_header_without_string_alg_is_malformed() {
    // Headers {"typ":"JWT"} and {"alg":256}
    for header in ["eyJ0eXAiOiJKV1QifQ", "eyJhbGciOjI1Nn0"] {
        let token = format!("{}.e30.c2ln", header);
        let error = codec().resolve_key(&token, SECRET).err().unwrap();
        assert!(matches!(error, TokenError::Malformed { .. }), "header {}", header);
        assert!(!error.is_signature_error());
    }
}

#[test]
fn test_claim_id_wrong_type() {
    let token = sign(
        json!({"id": "badID", "username": "username", "email": "email@email.com"}),
        Algorithm::HS256,
        SECRET,
    );

    let error = codec().extract(&token, SECRET).unwrap_err();
    assert_eq!(error, TokenError::ClaimType { claim: "id" });
    assert_eq!(error.to_string(), "claims['id'] wrong type");
}

#[test]
fn test_claim_username_wrong_type() {
    let token = sign(
        json!({"id": 1, "username": 1, "email": "email@email.com"}),
        Algorithm::HS256,
        SECRET,
    );

    let error = codec().extract(&token, SECRET).unwrap_err();
    assert_eq!(error.to_string(), "claims['username'] wrong type");
}

#[test]
fn test_claim_email_wrong_type() {
    let token = sign(
        json!({"id": 1, "username": "username", "email": 1}),
        Algorithm::HS256,
        SECRET,
    );

    let error = codec().extract(&token, SECRET).unwrap_err();
    assert_eq!(error.to_string(), "claims['email'] wrong type");
}

#[test]
fn test_claim_checks_run_in_fixed_order() {
    let token = sign(
        json!({"id": "bad", "username": 2, "email": 3}),
        Algorithm::HS256,
        SECRET,
    );
    assert_eq!(
        codec().extract(&token, SECRET).unwrap_err(),
        TokenError::ClaimType { claim: "id" }
    );

    let token = sign(json!({"id": 1, "email": 3}), Algorithm::HS256, SECRET);
    assert_eq!(
        codec().extract(&token, SECRET).unwrap_err(),
        TokenError::ClaimType { claim: "username" }
    );
}

#[test]
fn test_missing_claim_is_wrong_type() {
    let token = sign(json!({"username": "username", "email": "email@email.com"}), Algorithm::HS256, SECRET);

    assert_eq!(
        codec().extract(&token, SECRET).unwrap_err(),
        TokenError::ClaimType { claim: "id" }
    );
}

#[test]
fn test_fractional_id_is_truncated() {
    let token = sign(
        json!({"id": 7.9, "username": "username", "email": "email@email.com"}),
        Algorithm::HS256,
        SECRET,
    );

    assert_eq!(codec().extract(&token, SECRET).unwrap().id, 7);
}

#[test]
fn test_signature_checked_before_claims() {
    let token = sign(json!({"id": "badID"}), Algorithm::HS256, b"other");

    assert_eq!(
        codec().extract(&token, SECRET).unwrap_err(),
        TokenError::InvalidSignature
    );
}

#[test]
fn test_asymmetric_algorithm_is_unsupported() {
    let error = ClaimCodec::new(Algorithm::RS256).unwrap_err();
    assert!(matches!(error, TokenError::UnsupportedAlgorithm { .. }));

    let config = TokenServiceConfig {
        algorithm: Algorithm::ES256,
        ..Default::default()
    };
    assert!(ClaimCodec::from_config(&config).is_err());
}

#[test]
fn test_hs384_codec_rejects_hs256_tokens() {
    let hs384 = ClaimCodec::new(Algorithm::HS384).unwrap();
    let token = codec().generate(&principal(), SECRET).unwrap();

    assert!(hs384.extract(&token, SECRET).unwrap_err().is_signature_error());

    let own = hs384.generate(&principal(), SECRET).unwrap();
    assert_eq!(hs384.extract(&own, SECRET).unwrap(), principal());
}
