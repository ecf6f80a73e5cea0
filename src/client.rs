//! High-level client — `CoinGeckoClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the injected transport, and the loader
//! constructors.

use crate::domain::coin::client::Coins;
use crate::domain::coin::CoinDetailLoader;
use crate::domain::market::client::Markets;
use crate::domain::market::MarketListLoader;
use crate::error::SdkError;
use crate::http::{ApiKey, Fetcher, RetryPolicy};
use crate::shared::{CoinId, TimeRange};

use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::market::client::Markets as MarketsClient;

/// The primary entry point for the SDK.
///
/// Cheap to clone: the transport is shared behind an `Arc`.
#[derive(Clone)]
pub struct CoinGeckoClient {
    pub(crate) fetcher: Arc<dyn Fetcher>,
    pub(crate) base_url: String,
}

impl CoinGeckoClient {
    pub fn builder() -> CoinGeckoClientBuilder {
        CoinGeckoClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    // ── Loaders ──────────────────────────────────────────────────────────

    /// Loader backing the market list screen.
    pub fn market_list_loader(&self) -> MarketListLoader {
        MarketListLoader::new(self.clone())
    }

    /// Loader backing one coin detail screen.
    pub fn coin_detail_loader(&self, coin_id: impl Into<CoinId>, range: TimeRange) -> CoinDetailLoader {
        CoinDetailLoader::new(self.clone(), coin_id.into(), range)
    }

    /// GET `url` through the transport and decode the body into `T`.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, SdkError> {
        let body = self.fetcher.get_json(url).await?;
        Ok(serde_json::from_value(body)?)
    }
}

impl std::fmt::Debug for CoinGeckoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinGeckoClientBuilder {
    base_url: Option<String>,
    api_key: Option<ApiKey>,
    timeout: Duration,
    retry_policy: RetryPolicy,
    fetcher: Option<Arc<dyn Fetcher>>,
}

impl Default for CoinGeckoClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: Duration::from_secs(30),
            retry_policy: RetryPolicy::None,
            fetcher: None,
        }
    }
}

impl CoinGeckoClientBuilder {
    /// Override the API host. Takes precedence over the host implied by a
    /// pro key.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.trim_end_matches('/').to_string());
        self
    }

    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Per-request timeout of the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry policy of the default transport.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Replace the default transport. Timeout, retry policy and API key are
    /// then the injected fetcher's business.
    pub fn fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn build(self) -> Result<CoinGeckoClient, SdkError> {
        let base_url = match (&self.base_url, &self.api_key) {
            (Some(url), _) => url.clone(),
            (None, Some(ApiKey::Pro(_))) => crate::network::PRO_API_URL.to_string(),
            (None, _) => crate::network::DEFAULT_API_URL.to_string(),
        };

        let fetcher = match self.fetcher {
            Some(fetcher) => fetcher,
            None => default_fetcher(self.timeout, self.api_key, self.retry_policy)?,
        };

        Ok(CoinGeckoClient { fetcher, base_url })
    }
}

#[cfg(feature = "http")]
fn default_fetcher(
    timeout: Duration,
    api_key: Option<ApiKey>,
    retry: RetryPolicy,
) -> Result<Arc<dyn Fetcher>, SdkError> {
    let http = crate::http::CoinGeckoHttp::new(timeout, api_key, retry)?;
    Ok(Arc::new(http))
}

#[cfg(not(feature = "http"))]
fn default_fetcher(
    _timeout: Duration,
    _api_key: Option<ApiKey>,
    _retry: RetryPolicy,
) -> Result<Arc<dyn Fetcher>, SdkError> {
    Err(SdkError::Other(
        "No transport configured: enable the `http` feature or call `fetcher()`".to_string(),
    ))
}
