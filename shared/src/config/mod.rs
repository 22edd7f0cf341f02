//! Configuration module
//!
//! - `cache` - token state store backend and Redis connection
//! - `environment` - environment detection and logging configuration
//! - `server` - HTTP server configuration

pub mod cache;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use cache::{CacheConfig, CacheStrategyConfig, CacheType};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Prefix for environment overrides applied on top of file configuration,
/// e.g. `TC__SERVER__PORT=9091`.
const ENV_OVERRIDE_PREFIX: &str = "TC";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Token state store configuration
    pub store: CacheStrategyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            store: CacheStrategyConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut logging = LoggingConfig::for_environment(environment);
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            environment,
            server: ServerConfig::from_env(),
            store: CacheStrategyConfig::from_env(),
            logging,
        }
    }

    /// Load the full layered configuration
    ///
    /// Order, lowest priority first: environment variables, the optional
    /// per-environment TOML file, then `TC__`-prefixed overrides.
    /// Outside Docker (`DOCKER` != `true`) a local `.env` file is read first.
    pub fn load() -> Result<Self, ConfigError> {
        if !is_docker_run() {
            dotenvy::dotenv().ok();
        }

        let base = Self::from_env();
        let layered = config::Config::builder()
            .add_source(config::Config::try_from(&base)?)
            .add_source(config::File::with_name(&base.environment.config_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_OVERRIDE_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(layered.try_deserialize()?)
    }
}

/// Whether the process runs inside the Docker image
pub fn is_docker_run() -> bool {
    std::env::var("DOCKER").map(|v| v == "true").unwrap_or(false)
}
