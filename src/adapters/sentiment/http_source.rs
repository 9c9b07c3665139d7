//! HTTP sentiment source. Implements SentimentSource with a single GET.
//!
//! Any transport failure or non-success status maps to `FetchError::Network`.
//! The body is returned untouched; the directory parses it.

use crate::domain::{DomainError, FetchError};
use crate::ports::SentimentSource;
use std::time::Duration;
use tracing::{info, warn};

pub struct HttpSentimentSource {
    client: reqwest::Client,
    api_url: String,
}

impl HttpSentimentSource {
    /// # Arguments
    /// * `api_url` - Endpoint returning `{"data": "<json string>"}`
    /// * `timeout` - Whole-request timeout
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self { client, api_url })
    }
}

#[async_trait::async_trait]
impl SentimentSource for HttpSentimentSource {
    async fn fetch_all_city_sentiment(&self) -> Result<String, FetchError> {
        info!(url = %self.api_url, "fetching city sentiment");

        let response = self
            .client
            .get(&self.api_url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "sentiment API returned error");
            return Err(FetchError::Network(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to read response body: {}", e)))
    }
}
