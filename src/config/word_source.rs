//! Word source configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Which word source to use
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WordSourceBackend {
    /// Built-in or configured word list
    #[default]
    Fixed,
    /// Remote random-word HTTP API
    Http,
}

/// Word source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WordSourceConfig {
    /// Backend selection
    #[serde(default)]
    pub backend: WordSourceBackend,

    /// Random-word API endpoint, queried as `{api_url}?words=N&length=L`
    pub api_url: Option<String>,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Word list for the fixed backend; the built-in list when empty
    #[serde(default)]
    pub words: Vec<String>,
}

impl WordSourceConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate word source configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.backend == WordSourceBackend::Http {
            let url = self
                .api_url
                .as_deref()
                .ok_or(ValidationError::MissingRequired("WORD_SOURCE__API_URL"))?;
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidWordSourceUrl);
            }
        }
        Ok(())
    }
}

impl Default for WordSourceConfig {
    fn default() -> Self {
        Self {
            backend: WordSourceBackend::default(),
            api_url: None,
            timeout_secs: default_timeout(),
            words: Vec::new(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}
