//! Unit tests for token service

use std::sync::Arc;

use jsonwebtoken::Algorithm;

use crate::domain::entities::principal::Principal;
use crate::errors::{DomainError, StoreError, TokenError};
use crate::repositories::token_state::memory::CLOSED_MESSAGE;
use crate::repositories::{InMemoryTokenStore, TokenStateStore};
use crate::services::token::{ManagementStrategy, TokenService, TokenServiceConfig};

const SECRET: &[u8] = b"secret";

fn create_test_service() -> (TokenService<Arc<InMemoryTokenStore>>, Arc<InMemoryTokenStore>) {
    let store = Arc::new(InMemoryTokenStore::new());
    let service = TokenService::new(store.clone(), TokenServiceConfig::default())
        .expect("Failed to create token service");
    (service, store)
}

fn principal() -> Principal {
    Principal::new(1, "username", "email@email.com")
}

#[test]
fn test_new_rejects_asymmetric_algorithm() {
    let config = TokenServiceConfig {
        algorithm: Algorithm::RS256,
        ..Default::default()
    };

    let result = TokenService::new(InMemoryTokenStore::new(), config);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::UnsupportedAlgorithm { .. }))
    ));
}

#[test]
fn test_generate_and_extract() {
    let (service, _) = create_test_service();

    let token = service.generate_token(&principal(), SECRET).unwrap();
    assert!(!token.is_empty());

    let extracted = service.extract_token(&token, SECRET).unwrap();
    assert_eq!(extracted, principal());
}

#[test]
fn test_generate_does_not_touch_store() {
    let (service, store) = create_test_service();
    store.close();

    assert!(service.generate_token(&principal(), SECRET).is_ok());
}

#[test]
fn test_extract_with_other_secret_fails() {
    let (service, _) = create_test_service();
    let token = service.generate_token(&principal(), b"secret-one").unwrap();

    let error = service.extract_token(&token, b"secret-two").unwrap_err();
    assert_eq!(error, DomainError::Token(TokenError::InvalidSignature));
    assert_eq!(error.error_code(), "SIGNATURE_INVALID");
}

#[test]
fn test_extract_empty_token() {
    let (service, _) = create_test_service();

    let error = service.extract_token("", b"").unwrap_err();
    assert!(error.to_string().contains("invalid number of segments"));
    assert_eq!(error.error_code(), "TOKEN_MALFORMED");
}

#[tokio::test]
async fn test_set_check_delete_lifecycle() {
    let (service, _) = create_test_service();
    let token = service.generate_token(&principal(), SECRET).unwrap();

    assert!(!service.check_token(&token).await.unwrap());

    service.manage_token(ManagementStrategy::Set, &token).await.unwrap();
    assert!(service.check_token(&token).await.unwrap());

    service.manage_token(ManagementStrategy::Delete, &token).await.unwrap();
    assert!(!service.check_token(&token).await.unwrap());
}

#[tokio::test]
async fn test_manage_is_idempotent() {
    let (service, store) = create_test_service();
    let token = service.generate_token(&principal(), SECRET).unwrap();

    for _ in 0..3 {
        service.manage_token(ManagementStrategy::Set, &token).await.unwrap();
    }
    assert!(service.check_token(&token).await.unwrap());
    assert_eq!(store.len().await, 1);

    for _ in 0..3 {
        service.manage_token(ManagementStrategy::Delete, &token).await.unwrap();
    }
    assert!(!service.check_token(&token).await.unwrap());
}

#[tokio::test]
async fn test_manage_does_not_validate_token() {
    let (service, store) = create_test_service();

    service.manage_token(ManagementStrategy::Set, "not-a-jwt").await.unwrap();
    service.manage_token(ManagementStrategy::Set, "").await.unwrap();

    assert!(store.exists("not-a-jwt").await.unwrap());
    assert!(service.check_token("").await.unwrap());
}

#[tokio::test]
async fn test_check_unknown_empty_token_is_false() {
    let (service, _) = create_test_service();
    assert!(!service.check_token("").await.unwrap());
}

#[tokio::test]
async fn test_manage_surfaces_closed_backend() {
    let (service, store) = create_test_service();
    store.close();

    for strategy in [ManagementStrategy::Set, ManagementStrategy::Delete] {
        let error = service.manage_token(strategy, "").await.unwrap_err();
        assert_eq!(error, DomainError::Store(StoreError::unavailable(CLOSED_MESSAGE)));
        assert!(error.to_string().contains("client is closed"));
    }
}

#[tokio::test]
async fn test_check_surfaces_closed_backend() {
    let (service, store) = create_test_service();
    let token = service.generate_token(&principal(), SECRET).unwrap();
    service.manage_token(ManagementStrategy::Set, &token).await.unwrap();
    store.close();

    let error = service.check_token(&token).await.unwrap_err();
    assert_eq!(error.error_code(), "BACKEND_UNAVAILABLE");
}

#[tokio::test]
async fn test_ping_store_follows_backend_state() {
    let (service, store) = create_test_service();
    service.ping_store().await.unwrap();

    store.close();
    let error = service.ping_store().await.unwrap_err();
    assert_eq!(error, DomainError::Store(StoreError::unavailable(CLOSED_MESSAGE)));
}

#[tokio::test]
async fn test_concurrent_operations() {
    let (service, _) = create_test_service();
    let service = Arc::new(service);

    let mut handles = Vec::new();
    for id in 0..16 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            let principal = Principal::new(id, "user", "user@example.com");
            let token = service.generate_token(&principal, SECRET).unwrap();
            service.manage_token(ManagementStrategy::Set, &token).await.unwrap();
            assert_eq!(service.extract_token(&token, SECRET).unwrap().id, id);
            service.check_token(&token).await.unwrap()
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap());
    }
}

#[tokio::test]
async fn test_concrete_scenario() {
    let (service, _) = create_test_service();

    let token = service.generate_token(&principal(), b"secret").unwrap();
    let extracted = service.extract_token(&token, b"secret").unwrap();
    assert_eq!(extracted.id, 1);
    assert_eq!(extracted.username, "username");
    assert_eq!(extracted.email, "email@email.com");

    assert!(!service.check_token(&token).await.unwrap());
    service.manage_token(ManagementStrategy::Set, &token).await.unwrap();
    assert!(service.check_token(&token).await.unwrap());
    service.manage_token(ManagementStrategy::Delete, &token).await.unwrap();
    assert!(!service.check_token(&token).await.unwrap());
}

#[test]
fn test_mask_token() {
    use crate::services::token::service::mask_token;

    assert_eq!(mask_token("eyJhbGciOiJIUzI1NiJ9.payload.sig"), "eyJhbGci...");
    assert_eq!(mask_token("short"), "short");
    assert_eq!(mask_token(""), "");
}
