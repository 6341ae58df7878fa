//! Sismos Feed
//!
//! Fetches the earthquake list from the configured HTTP endpoint and parses
//! it into [`Earthquake`] records. One GET per call: no retries, no cache.

use std::time::Duration;

use sismos_common::config::FeedConfig;
use sismos_common::error::{SismosError, SismosResult};
use sismos_quake_model::earthquake::{parse_records, Earthquake};

/// Client for the earthquake feed.
pub struct FeedClient {
    http_client: reqwest::Client,
    url: String,
}

impl FeedClient {
    pub fn new(config: &FeedConfig) -> SismosResult<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SismosError::feed(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download the raw response body.
    pub async fn fetch_raw(&self) -> SismosResult<String> {
        tracing::debug!(url = %self.url, "Requesting earthquake feed");

        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SismosError::feed(format!("{}: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = if error_text.trim().is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                error_text
            };
            return Err(SismosError::http(status.as_u16(), message));
        }

        response
            .text()
            .await
            .map_err(|e| SismosError::feed(format!("Failed to read response body: {e}")))
    }

    /// Download and parse the feed.
    pub async fn fetch(&self) -> SismosResult<Vec<Earthquake>> {
        let body = self.fetch_raw().await?;
        let records = parse_records(&body)
            .map_err(|e| SismosError::parse(format!("Unexpected feed payload: {e}")))?;

        tracing::info!(url = %self.url, records = records.len(), "Fetched earthquake feed");
        Ok(records)
    }
}
