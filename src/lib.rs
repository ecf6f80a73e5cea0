//! # CoinScope SDK
//!
//! Data layer of a cryptocurrency price viewer backed by the public
//! CoinGecko REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Newtypes, domain models, derived metrics and view models
//! 2. **HTTP API** — `Fetcher` transport seam, `CoinGeckoHttp` with retry policies
//! 3. **High-Level Client** — `CoinGeckoClient` with nested sub-clients
//! 4. **Loaders** — Screen state holders (`MarketListLoader`, `CoinDetailLoader`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinscope_sdk::prelude::*;
//!
//! let client = CoinGeckoClient::builder().build()?;
//!
//! let coins = client.market_list_loader().load().await;
//!
//! let detail = client.coin_detail_loader("bitcoin", TimeRange::OneMonth);
//! detail.load().await;
//! if let LoadState::Success(view) = detail.view_state().await {
//!     println!("{} {}", view.current_price_display, view.sentiment.map(|s| s.to_string()).unwrap_or_default());
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, loaders.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Transport seam and the reqwest-backed client with retry policies.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinGeckoClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CoinId, LoadState, TimeRange};

    // Domain types — market
    pub use crate::domain::market::{CoinSummary, MarketListLoader};

    // Domain types — coin
    pub use crate::domain::coin::{
        CoinDetail, CoinDetailLoader, CoinDetailView, CoinMetadata, EntrancePlan, FetchOutcome,
        RangeIndicator, Sentiment, StatKind, StatTile,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, PRO_API_URL};

    // Client + sub-clients
    pub use crate::client::{CoinGeckoClient, CoinGeckoClientBuilder, CoinsClient, MarketsClient};

    // Transport
    #[cfg(feature = "http")]
    pub use crate::http::CoinGeckoHttp;
    pub use crate::http::{ApiKey, Fetcher, RetryConfig, RetryPolicy};
}
