//! Wire types for the market listing (REST).

use serde::{Deserialize, Serialize};

/// Raw record from `/coins/markets`.
///
/// Every field is optional here so a missing or `null` value surfaces as a
/// validation error naming the field instead of an opaque serde message.
/// Fields the SDK does not use are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketCoinResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

/// Response body of `/coins/markets`: a bare JSON array.
pub type MarketsResponse = Vec<MarketCoinResponse>;
