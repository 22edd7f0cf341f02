use actix_web::{web, HttpResponse};

use crate::dto::{PrincipalResponse, TokenSecretRequest};

use tc_core::domain::Principal;
use tc_core::repositories::TokenStateStore;

use super::AppState;

/// Handler for POST /extract
///
/// Always answers 200. On failure the principal fields are zero values and
/// `err` carries the reason, e.g. `"signature is invalid"` or
/// `"claims['email'] wrong type"`.
pub async fn extract<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<TokenSecretRequest>,
) -> HttpResponse
where
    S: TokenStateStore + 'static,
{
    let response = match state
        .token_service
        .extract_token(&request.token, request.secret.as_bytes())
    {
        Ok(principal) => PrincipalResponse::new(principal, String::new()),
        Err(e) => PrincipalResponse::new(Principal::default(), e.to_string()),
    };

    HttpResponse::Ok().json(response)
}
