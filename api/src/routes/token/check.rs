use actix_web::{web, HttpResponse};

use crate::dto::{CheckResponse, TokenRequest};

use tc_core::repositories::TokenStateStore;

use super::AppState;

/// Handler for POST /check
///
/// `check` is `false` whenever `err` is set.
pub async fn check<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<TokenRequest>,
) -> HttpResponse
where
    S: TokenStateStore + 'static,
{
    let response = match state.token_service.check_token(&request.token).await {
        Ok(check) => CheckResponse {
            check,
            err: String::new(),
        },
        Err(e) => CheckResponse {
            check: false,
            err: e.to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}
