use actix_web::{web, HttpResponse};

use crate::dto::{ErrorResponse, TokenRequest};

use tc_core::repositories::TokenStateStore;
use tc_core::services::ManagementStrategy;

use super::AppState;

/// Handler for POST /token
pub async fn set_token<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<TokenRequest>,
) -> HttpResponse
where
    S: TokenStateStore + 'static,
{
    manage(state, ManagementStrategy::Set, request.into_inner()).await
}

/// Handler for DELETE /token
pub async fn delete_token<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<TokenRequest>,
) -> HttpResponse
where
    S: TokenStateStore + 'static,
{
    manage(state, ManagementStrategy::Delete, request.into_inner()).await
}

async fn manage<S>(
    state: web::Data<AppState<S>>,
    strategy: ManagementStrategy,
    request: TokenRequest,
) -> HttpResponse
where
    S: TokenStateStore + 'static,
{
    let err = match state.token_service.manage_token(strategy, &request.token).await {
        Ok(()) => String::new(),
        Err(e) => e.to_string(),
    };

    HttpResponse::Ok().json(ErrorResponse { err })
}
