//! Random-word HTTP API client.
//!
//! Queries `GET {api_url}?words={count}&length={length}` and expects a JSON
//! array of strings in return.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::game::WordLength;
use crate::ports::{WordSource, WordSourceError};

/// Word source backed by a remote random-word API.
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    client: Client,
    api_url: String,
}

impl HttpWordSource {
    /// Creates a source for `api_url` with a per-request timeout.
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, WordSourceError> {
        let api_url = api_url.into();
        if api_url.is_empty() {
            return Err(WordSourceError::Unconfigured("api_url".to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WordSourceError::Request(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, api_url })
    }
}

#[async_trait]
impl WordSource for HttpWordSource {
    async fn random_words(
        &self,
        length: WordLength,
        count: usize,
    ) -> Result<Vec<String>, WordSourceError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("words", count.to_string()), ("length", length.to_string())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WordSourceError::Request(format!("Timed out: {}", e))
                } else if e.is_connect() {
                    WordSourceError::Request(format!("Connection failed: {}", e))
                } else {
                    WordSourceError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WordSourceError::Request(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            return Err(WordSourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_words(&body)
    }
}

/// Parses the API body into normalized words.
fn parse_words(body: &str) -> Result<Vec<String>, WordSourceError> {
    let words: Vec<String> =
        serde_json::from_str(body).map_err(|e| WordSourceError::Malformed(e.to_string()))?;
    Ok(words.into_iter().map(|w| w.trim().to_lowercase()).collect())
}
