//! Conversions from coin wire types to domain types.

use super::wire::{CoinResponse, CurrencyValues, MarketChartResponse};
use super::{CoinDetail, CoinMetadata, CoinValidationError};

fn usd(values: Option<CurrencyValues>) -> Option<f64> {
    values.and_then(|v| v.usd)
}

impl From<CoinResponse> for CoinMetadata {
    fn from(source: CoinResponse) -> Self {
        let market = source.market_data.unwrap_or_default();
        Self {
            image_url: source.image.and_then(|i| i.large),
            market_cap: usd(market.market_cap),
            volume_24h: usd(market.total_volume),
            high_24h: usd(market.high_24h),
            low_24h: usd(market.low_24h),
        }
    }
}

impl TryFrom<MarketChartResponse> for Vec<f64> {
    type Error = CoinValidationError;

    /// Keeps the price of each `[timestamp, price]` pair, in order.
    fn try_from(source: MarketChartResponse) -> Result<Self, Self::Error> {
        let points = source.prices.ok_or(CoinValidationError::MissingPrices)?;
        Ok(points.into_iter().map(|(_, price)| price).collect())
    }
}

impl TryFrom<(MarketChartResponse, CoinResponse)> for CoinDetail {
    type Error = CoinValidationError;

    fn try_from((chart, coin): (MarketChartResponse, CoinResponse)) -> Result<Self, Self::Error> {
        let series: Vec<f64> = chart.try_into()?;
        CoinDetail::new(series, coin.into())
    }
}
