//! HTTP layer — the [`Fetcher`] transport seam, the reqwest-backed
//! `CoinGeckoHttp`, and retry policies.

#[cfg(feature = "http")]
pub mod client;
pub mod retry;

#[cfg(feature = "http")]
pub use client::CoinGeckoHttp;
pub use retry::{RetryConfig, RetryPolicy};

use crate::error::HttpError;
use async_trait::async_trait;
use std::fmt;

/// Transport capability: GET a URL and return its JSON body.
///
/// Every sub-client and loader goes through this trait, so the whole SDK can
/// run against a stub in tests. Implementations map non-2xx responses to
/// [`HttpError`] and leave decoding into wire types to the caller.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, HttpError>;
}

/// CoinGecko API key. Demo keys work against the public host, pro keys
/// against the paid host.
#[derive(Clone, PartialEq, Eq)]
pub enum ApiKey {
    Demo(String),
    Pro(String),
}

impl ApiKey {
    pub fn header_name(&self) -> &'static str {
        match self {
            ApiKey::Demo(_) => "x-cg-demo-api-key",
            ApiKey::Pro(_) => "x-cg-pro-api-key",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ApiKey::Demo(k) | ApiKey::Pro(k) => k,
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKey::Demo(_) => write!(f, "ApiKey::Demo(***)"),
            ApiKey::Pro(_) => write!(f, "ApiKey::Pro(***)"),
        }
    }
}
