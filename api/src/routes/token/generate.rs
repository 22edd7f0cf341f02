use actix_web::{web, HttpResponse};
use tracing::error;

use crate::dto::{GenerateTokenRequest, TokenResponse};
use crate::handlers::error::domain_error_response;

use tc_core::repositories::TokenStateStore;

use super::AppState;

/// Handler for POST /generate
///
/// # Request Body
///
/// ```json
/// {
///     "id": 10,
///     "username": "user",
///     "email": "user@example.com",
///     "secret": "secretKey"
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn generate<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<GenerateTokenRequest>,
) -> HttpResponse
where
    S: TokenStateStore + 'static,
{
    let request = request.into_inner();
    let principal = request.principal();

    match state
        .token_service
        .generate_token(&principal, request.secret.as_bytes())
    {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
        Err(e) => {
            error!(principal_id = principal.id, error = %e, "Token generation failed");
            domain_error_response(&e)
        }
    }
}
