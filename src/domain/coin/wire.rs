//! Wire types for coin responses (REST).

use serde::{Deserialize, Serialize};

/// Response of `/coins/{id}/market_chart`.
///
/// `prices` is `[timestamp_ms, price]` pairs, oldest first. Market caps and
/// volumes are also returned but not used.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketChartResponse {
    #[serde(default)]
    pub prices: Option<Vec<(f64, f64)>>,
}

/// Per-currency value map, e.g. `{"usd": 64000.0, "eur": ...}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CurrencyValues {
    #[serde(default)]
    pub usd: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageResponse {
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketDataResponse {
    #[serde(default)]
    pub market_cap: Option<CurrencyValues>,
    #[serde(default)]
    pub total_volume: Option<CurrencyValues>,
    #[serde(default)]
    pub high_24h: Option<CurrencyValues>,
    #[serde(default)]
    pub low_24h: Option<CurrencyValues>,
}

/// Response of `/coins/{id}`, reduced to the fields the detail screen uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CoinResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub image: Option<ImageResponse>,
    #[serde(default)]
    pub market_data: Option<MarketDataResponse>,
}
