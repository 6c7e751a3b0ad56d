use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::metrics::RequestMetrics;
use super::region::Region;
use super::types::ErrorBodyDto;
use crate::config::Config;
use crate::error::AppError;

pub struct RiotClient {
    client: reqwest::Client,
    /// Riot API Key
    key: String,
    /// Base URL with a `{platform}` placeholder for the routing token.
    base_url: String,
    metrics: Arc<RequestMetrics>,
}

impl RiotClient {
    const PLATFORM_PLACEHOLDER: &'static str = "{platform}";

    pub fn with_base_url(
        key: String,
        base_url: impl Into<String>,
        metrics: Arc<RequestMetrics>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            metrics,
        }
    }

    pub fn from_config(config: &Config, metrics: Arc<RequestMetrics>) -> Self {
        Self::with_base_url(
            config.riot_api_key.clone(),
            config.riot_api_base_url.clone(),
            metrics,
        )
    }

    pub fn metrics(&self) -> &Arc<RequestMetrics> {
        &self.metrics
    }

    /// Root URL of the platform serving `region`.
    pub fn platform_url(&self, region: Region) -> String {
        self.base_url
            .replace(Self::PLATFORM_PLACEHOLDER, region.routing_token())
    }

    /// Issue a single authenticated GET and decode a 200 payload.
    ///
    /// Any other status is classified as [`AppError::Request`] (below 500) or
    /// [`AppError::Upstream`], carrying the message the provider attached to
    /// the response.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        tracing::trace!("[RIOT::CLIENT] GET {}", url);
        self.metrics.record_request();

        let res = self.send(url).await;
        if res.is_err() {
            self.metrics.record_failure();
        }

        res
    }

    async fn send<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let res = self
            .client
            .get(url)
            .query(&[("api_key", self.key.as_str())])
            .send()
            .await?;

        let status = res.status();
        if status == StatusCode::OK {
            return Ok(res.json().await?);
        }

        let body = res.text().await.unwrap_or_default();
        let err = classify_status(status, &body);
        tracing::debug!("[RIOT::CLIENT] {} answered {}: {}", url, status, err);

        Err(err)
    }
}

/// Map a non-200 status and its body to the matching error variant.
fn classify_status(status: StatusCode, body: &str) -> AppError {
    let message = serde_json::from_str::<ErrorBodyDto>(body)
        .map(|b| b.status.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    if status.is_server_error() {
        AppError::Upstream {
            status: status.as_u16(),
            message,
        }
    } else {
        AppError::Request {
            status: status.as_u16(),
            message,
        }
    }
}
