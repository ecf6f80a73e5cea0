//! Market domain — the ranked coin listing shown on the home screen.

pub mod client;
mod convert;
pub mod loader;
pub mod wire;

pub use loader::MarketListLoader;

use crate::shared::{display_price, format_percent_abs, CoinId};
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── CoinSummary ─────────────────────────────────────────────────────────────

/// One row of the market listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSummary {
    pub id: CoinId,
    pub name: String,
    pub symbol: String,
    pub image_url: String,
    /// USD.
    pub current_price: f64,
    pub percent_change_24h: f64,
}

impl CoinSummary {
    /// Price label for a list card.
    pub fn price_label(&self) -> String {
        display_price(self.current_price)
    }

    /// Signed 24h change label, e.g. `+2.41%` / `-0.73%`.
    pub fn change_label(&self) -> String {
        let sign = if self.percent_change_24h >= 0.0 { "+" } else { "-" };
        format!("{sign}{}", format_percent_abs(self.percent_change_24h))
    }

    /// Ticker in the upper case the cards show.
    pub fn ticker(&self) -> String {
        self.symbol.to_uppercase()
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum MarketValidationError {
    /// All problems with one listing record, keyed by its id (or position).
    Multiple(String, Vec<MarketValidationError>),
    MissingId,
    MissingName,
    MissingSymbol,
    MissingImage,
    MissingPrice,
    MissingChange,
}

impl fmt::Display for MarketValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketValidationError::Multiple(coin, errors) => {
                writeln!(f, "Coin validation errors ({coin}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            MarketValidationError::MissingId => write!(f, "Missing id"),
            MarketValidationError::MissingName => write!(f, "Missing name"),
            MarketValidationError::MissingSymbol => write!(f, "Missing symbol"),
            MarketValidationError::MissingImage => write!(f, "Missing image"),
            MarketValidationError::MissingPrice => write!(f, "Missing current price"),
            MarketValidationError::MissingChange => write!(f, "Missing 24h price change"),
        }
    }
}

impl std::error::Error for MarketValidationError {}
