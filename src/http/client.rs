//! Default transport — `CoinGeckoHttp`.
//!
//! Wraps a `reqwest::Client` with the API-key header, a request timeout and
//! the configured [`RetryPolicy`]. Returns raw JSON; conversion to domain
//! types happens in the sub-clients.

use super::{ApiKey, Fetcher};
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, RETRY_AFTER};
use reqwest::{Client, Response};
use std::time::Duration;

/// reqwest-backed [`Fetcher`].
#[derive(Clone)]
pub struct CoinGeckoHttp {
    client: Client,
    /// Sent on every request. Never logged.
    api_key: Option<ApiKey>,
    retry: RetryPolicy,
}

impl CoinGeckoHttp {
    pub fn new(
        timeout: Duration,
        api_key: Option<ApiKey>,
        retry: RetryPolicy,
    ) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()?;

        Ok(Self {
            client,
            api_key,
            retry,
        })
    }

    async fn request_with_retry(&self, url: &str) -> Result<serde_json::Value, HttpError> {
        let Some(config) = self.retry.config() else {
            return self.do_request(url).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request(url).await {
                Ok(body) => return Ok(body),
                Err(e) if config.is_retryable(&e) && attempt < config.max_retries => {
                    let delay = config.delay_for(attempt, &e);
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying request to {}",
                        url
                    );
                    futures_timer::Delay::new(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request(&self, url: &str) -> Result<serde_json::Value, HttpError> {
        let mut req = self.client.get(url).header(ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            req = req.header(key.header_name(), key.value());
        }

        tracing::debug!("GET {}", url);
        let resp = req.send().await.map_err(map_transport_error)?;
        let status = resp.status();

        if status.is_success() {
            return resp.json().await.map_err(map_transport_error);
        }

        let retry_after_ms = retry_after_ms(&resp);
        let body = resp.text().await.unwrap_or_default();
        Err(HttpError::from_status(status.as_u16(), body, retry_after_ms))
    }
}

#[async_trait]
impl Fetcher for CoinGeckoHttp {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, HttpError> {
        self.request_with_retry(url).await
    }
}

fn map_transport_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(e)
    }
}

/// `Retry-After` in delta-seconds form, converted to milliseconds.
fn retry_after_ms(resp: &Response) -> Option<u64> {
    resp.headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(|secs| secs.saturating_mul(1000))
}
