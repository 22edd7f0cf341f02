//! Application factory and server bootstrap
//!
//! Builds the Actix-web application over any token state store and runs
//! the HTTP server.

use std::time::Duration;

use actix_web::{web, App, HttpResponse, HttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::handlers::error::json_error_handler;
use crate::routes::token::{
    check::check, extract::extract, generate::generate, manage::{delete_token, set_token},
    AppState,
};

use tc_core::repositories::TokenStateStore;
use tc_core::services::{TokenService, TokenServiceConfig};
use tc_shared::ServerConfig;

/// Create and configure the application with all routes
///
/// Request bodies larger than `max_payload_size` bytes, or that do not decode
/// into the endpoint's request type, are rejected with 400 and an `err` body.
pub fn create_app<S>(
    app_state: web::Data<AppState<S>>,
    max_payload_size: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: TokenStateStore + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(max_payload_size)
        .content_type_required(false)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // Health check endpoint
        .route("/health", web::get().to(health_check::<S>))
        // Token routes
        .route("/generate", web::post().to(generate::<S>))
        .route("/extract", web::post().to(extract::<S>))
        .service(
            web::resource("/token")
                .route(web::post().to(set_token::<S>))
                .route(web::delete().to(delete_token::<S>)),
        )
        .route("/check", web::post().to(check::<S>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Run the HTTP server until it is stopped
///
/// The store is owned by the server for its whole lifetime.
pub async fn run_server<S>(
    server: &ServerConfig,
    store: S,
    service_config: TokenServiceConfig,
) -> anyhow::Result<()>
where
    S: TokenStateStore + 'static,
{
    let token_service = TokenService::new(store, service_config)?;
    let app_state = web::Data::new(AppState::new(token_service));
    let max_payload_size = server.max_payload_size;

    let bind_address = server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut http_server = HttpServer::new(move || {
        create_app(app_state.clone(), max_payload_size).wrap(TracingLogger::default())
    })
    .keep_alive(Duration::from_secs(server.keep_alive));

    if server.workers > 0 {
        http_server = http_server.workers(server.workers);
    }

    http_server.bind(&bind_address)?.run().await?;

    info!("Server stopped");
    Ok(())
}

/// Health check endpoint handler
///
/// Answers 503 with the backend error in `err` when the token store does
/// not respond.
async fn health_check<S>(state: web::Data<AppState<S>>) -> HttpResponse
where
    S: TokenStateStore + 'static,
{
    let timestamp = chrono::Utc::now().to_rfc3339();

    match state.token_service.ping_store().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "service": "tokencache-api",
            "version": env!("CARGO_PKG_VERSION"),
            "store": "up",
            "timestamp": timestamp,
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "service": "tokencache-api",
            "version": env!("CARGO_PKG_VERSION"),
            "store": "down",
            "err": e.to_string(),
            "timestamp": timestamp,
        })),
    }
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "err": "not found"
    }))
}
