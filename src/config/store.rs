//! Session store configuration

use serde::Deserialize;

use super::database::DatabaseConfig;
use super::error::ValidationError;
use super::redis::RedisConfig;

/// Which session store backend to use
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local map; games vanish on restart
    #[default]
    Memory,
    Redis,
    Postgres,
}

/// Session store configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoreConfig {
    /// Backend selection
    #[serde(default)]
    pub backend: StoreBackend,

    /// Table (Postgres) or key namespace (Redis) holding game records
    pub table_name: Option<String>,

    /// Redis settings, required for the redis backend
    pub redis: Option<RedisConfig>,

    /// PostgreSQL settings, required for the postgres backend
    pub database: Option<DatabaseConfig>,
}

impl StoreConfig {
    /// Returns the configured table name, if any
    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    /// Validate store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(table) = self.table_name() {
            if !is_valid_table_name(table) {
                return Err(ValidationError::InvalidTableName);
            }
        }

        match self.backend {
            StoreBackend::Memory => Ok(()),
            StoreBackend::Redis => {
                self.require_table()?;
                self.redis
                    .as_ref()
                    .ok_or(ValidationError::MissingRequired("STORE__REDIS__URL"))?
                    .validate()
            }
            StoreBackend::Postgres => {
                self.require_table()?;
                self.database
                    .as_ref()
                    .ok_or(ValidationError::MissingRequired("STORE__DATABASE__URL"))?
                    .validate()
            }
        }
    }

    fn require_table(&self) -> Result<(), ValidationError> {
        match self.table_name() {
            Some(_) => Ok(()),
            None => Err(ValidationError::MissingRequired("STORE__TABLE_NAME")),
        }
    }
}

/// True for names safe to splice into SQL and Redis keys unquoted.
pub fn is_valid_table_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    name.len() <= 63
        && (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
