//! reqwest implementation of the page fetcher.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::gateways::{FetchRequest, HttpMethod, PageFetcher};
use crate::error::{AppError, map_reqwest_error};

/// HTTP transport backed by a reqwest client.
///
/// Idle pooling is disabled, so a connection never outlives the call that
/// opened it, whether the call succeeds or fails.
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Creates a fetcher with the given timeout and default user agent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Transport`] if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| AppError::transport("<client>", e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a fetcher from the snapshot configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            Duration::from_secs(config.request_timeout_secs),
            &config.user_agent,
        )
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch(&self, request: FetchRequest) -> Result<String, AppError> {
        let FetchRequest {
            url,
            method,
            headers,
            body,
        } = request;

        debug!(url = %url, method = ?method, "Sending request");

        let mut builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!(url = %url, error = %e, "Request failed");
                map_reqwest_error(&url, e)
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| map_reqwest_error(&url, e))?;

        debug!(url = %url, status = %status, bytes = text.len(), "Response received");
        Ok(text)
    }
}
