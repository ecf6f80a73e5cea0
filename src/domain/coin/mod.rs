//! Coin domain — per-coin price series, metadata, derived display values and
//! the detail screen loader.

pub mod client;
mod convert;
pub mod entrance;
pub mod loader;
pub mod metrics;
pub mod view;
pub mod wire;

pub use entrance::{EntrancePlan, Motion, Target, Track};
pub use loader::{CoinDetailLoader, FetchOutcome};
pub use metrics::{percent_change, range_position, Sentiment};
pub use view::{CoinDetailView, RangeIndicator, StatKind, StatTile};

use serde::{Deserialize, Serialize};
use std::fmt;

// ─── CoinMetadata ────────────────────────────────────────────────────────────

/// The parts of `/coins/{id}` the detail screen shows. All USD, all optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinMetadata {
    pub image_url: Option<String>,
    pub market_cap: Option<f64>,
    pub volume_24h: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
}

// ─── CoinDetail ──────────────────────────────────────────────────────────────

/// Everything one detail-screen visit needs: a price series for the selected
/// range plus metadata.
///
/// The series is never empty; construction goes through [`CoinDetail::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinDetail {
    price_series: Vec<f64>,
    pub image_url: Option<String>,
    pub market_cap: Option<f64>,
    pub volume_24h: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
}

impl CoinDetail {
    pub fn new(price_series: Vec<f64>, metadata: CoinMetadata) -> Result<Self, CoinValidationError> {
        if price_series.is_empty() {
            return Err(CoinValidationError::EmptyPriceSeries);
        }

        Ok(Self {
            price_series,
            image_url: metadata.image_url,
            market_cap: metadata.market_cap,
            volume_24h: metadata.volume_24h,
            high_24h: metadata.high_24h,
            low_24h: metadata.low_24h,
        })
    }

    /// Prices oldest first.
    pub fn price_series(&self) -> &[f64] {
        &self.price_series
    }

    pub fn first_price(&self) -> f64 {
        self.price_series[0]
    }

    /// Latest point of the series, shown as the current price.
    pub fn current_price(&self) -> f64 {
        self.price_series[self.price_series.len() - 1]
    }

    /// Change over the series; `None` when the first price is zero.
    pub fn percent_change(&self) -> Option<f64> {
        percent_change(&self.price_series)
    }

    pub fn sentiment(&self) -> Option<Sentiment> {
        self.percent_change().map(Sentiment::from_percent_change)
    }

    /// Marker position of the current price on the 24h low/high bar.
    pub fn range_position(&self) -> Option<f64> {
        range_position(self.current_price(), self.low_24h?, self.high_24h?)
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CoinValidationError {
    EmptyPriceSeries,
    MissingPrices,
}

impl fmt::Display for CoinValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinValidationError::EmptyPriceSeries => write!(f, "No data available"),
            CoinValidationError::MissingPrices => write!(f, "Invalid chart data received"),
        }
    }
}

impl std::error::Error for CoinValidationError {}
