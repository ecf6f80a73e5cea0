//! Conversion: MarketCoinResponse → CoinSummary (TryFrom + validation).

use super::wire::MarketCoinResponse;
use super::{CoinSummary, MarketValidationError};

impl TryFrom<MarketCoinResponse> for CoinSummary {
    type Error = MarketValidationError;

    fn try_from(source: MarketCoinResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<MarketValidationError> = Vec::new();
        let label = source
            .id
            .clone()
            .unwrap_or_else(|| "<unknown>".to_string());

        let id = source.id.filter(|s| !s.is_empty()).unwrap_or_else(|| {
            errors.push(MarketValidationError::MissingId);
            String::new()
        });
        let name = source.name.unwrap_or_else(|| {
            errors.push(MarketValidationError::MissingName);
            String::new()
        });
        let symbol = source.symbol.unwrap_or_else(|| {
            errors.push(MarketValidationError::MissingSymbol);
            String::new()
        });
        let image_url = source.image.unwrap_or_else(|| {
            errors.push(MarketValidationError::MissingImage);
            String::new()
        });
        let current_price = source.current_price.unwrap_or_else(|| {
            errors.push(MarketValidationError::MissingPrice);
            0.0
        });
        let percent_change_24h = source.price_change_percentage_24h.unwrap_or_else(|| {
            errors.push(MarketValidationError::MissingChange);
            0.0
        });

        if !errors.is_empty() {
            return Err(MarketValidationError::Multiple(label, errors));
        }

        Ok(CoinSummary {
            id: id.into(),
            name,
            symbol,
            image_url,
            current_price,
            percent_change_24h,
        })
    }
}
