//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `WORDLE` prefix and nested values use double underscores as separators.
//!
//! The loaded [`AppConfig`] is handed to adapters at construction time; nothing
//! reads the process environment after startup.
//!
//! # Example
//!
//! ```no_run
//! use wordle_api::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod database;
mod error;
mod redis;
mod server;
mod store;
mod word_source;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use redis::RedisConfig;
pub use server::{Environment, ServerConfig};
pub use store::{is_valid_table_name, StoreBackend, StoreConfig};
pub use word_source::{WordSourceBackend, WordSourceConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every section has defaults, so an empty environment yields a runnable
/// development setup (in-memory store, built-in word list).
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Session store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Word source configuration
    #[serde(default)]
    pub word_source: WordSourceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WORDLE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WORDLE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `WORDLE__STORE__TABLE_NAME=games` -> `store.table_name = "games"`
    /// - `WORDLE__WORD_SOURCE__WORDS=crane,slate` -> `word_source.words = ["crane", "slate"]`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WORDLE")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("word_source.words"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.store.validate()?;
        self.word_source.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "WORDLE__SERVER__PORT",
        "WORDLE__SERVER__ENVIRONMENT",
        "WORDLE__STORE__BACKEND",
        "WORDLE__STORE__TABLE_NAME",
        "WORDLE__STORE__REDIS__URL",
        "WORDLE__STORE__REDIS__TTL_SECS",
        "WORDLE__WORD_SOURCE__BACKEND",
        "WORDLE__WORD_SOURCE__API_URL",
        "WORDLE__WORD_SOURCE__WORDS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        clear_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_empty_environment_yields_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.word_source.backend, WordSourceBackend::Fixed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_redis_store() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("WORDLE__STORE__BACKEND", "redis"),
            ("WORDLE__STORE__TABLE_NAME", "games"),
            ("WORDLE__STORE__REDIS__URL", "redis://localhost:6379"),
            ("WORDLE__STORE__REDIS__TTL_SECS", "86400"),
        ])
        .unwrap();

        assert_eq!(config.store.backend, StoreBackend::Redis);
        assert_eq!(config.store.table_name(), Some("games"));
        let redis = config.store.redis.as_ref().unwrap();
        assert_eq!(redis.url.expose_secret(), "redis://localhost:6379");
        assert_eq!(redis.ttl_secs, Some(86400));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_table_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("WORDLE__STORE__BACKEND", "redis"),
            ("WORDLE__STORE__REDIS__URL", "redis://localhost:6379"),
        ])
        .unwrap();

        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("STORE__TABLE_NAME"))
        );
    }

    #[test]
    fn test_load_word_list() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("WORDLE__WORD_SOURCE__WORDS", "crane,slate,brick")]).unwrap();

        assert_eq!(config.word_source.words, vec!["crane", "slate", "brick"]);
    }

    #[test]
    fn test_load_http_word_source() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("WORDLE__WORD_SOURCE__BACKEND", "http"),
            ("WORDLE__WORD_SOURCE__API_URL", "https://words.example.com/word"),
        ])
        .unwrap();

        assert_eq!(config.word_source.backend, WordSourceBackend::Http);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("WORDLE__SERVER__ENVIRONMENT", "production"),
            ("WORDLE__SERVER__PORT", "3000"),
        ])
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.server.port, 3000);
    }
}
