use anyhow::Context;
use tracing::{info, warn};

use tc_api::{app::run_server, telemetry::init_tracing};
use tc_core::repositories::InMemoryTokenStore;
use tc_core::services::TokenServiceConfig;
use tc_shared::{AppConfig, CacheType};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env outside Docker, config file, TC__ overrides)
    let config = AppConfig::load().context("loading configuration")?;

    init_tracing(&config.logging)?;

    info!(
        environment = %config.environment,
        store = ?config.store.cache_type,
        "Starting TokenCache API Server"
    );

    let service_config = TokenServiceConfig::default();

    match config.store.cache_type {
        CacheType::Redis => {
            let store = tc_infra::connect_token_store(config.store.redis.clone())
                .await
                .context("connecting to Redis")?;
            run_server(&config.server, store, service_config).await
        }
        CacheType::Memory => {
            warn!("Using in-memory token store; token state is lost on restart");
            run_server(&config.server, InMemoryTokenStore::new(), service_config).await
        }
    }
}
