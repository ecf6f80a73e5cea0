//! Coins sub-client — price series, metadata, and the combined detail fetch.

use crate::client::CoinGeckoClient;
use crate::domain::coin::wire::{CoinResponse, MarketChartResponse};
use crate::domain::coin::{CoinDetail, CoinMetadata, CoinValidationError};
use crate::error::SdkError;
use crate::network::VS_CURRENCY;
use crate::shared::{CoinId, TimeRange};

use futures_util::future::try_join;

/// Sub-client for per-coin operations.
pub struct Coins<'a> {
    pub(crate) client: &'a CoinGeckoClient,
}

impl<'a> Coins<'a> {
    pub fn market_chart_url(&self, coin_id: &CoinId, range: TimeRange) -> String {
        format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            self.client.base_url,
            coin_id.path_segment(),
            VS_CURRENCY,
            range.days()
        )
    }

    pub fn coin_url(&self, coin_id: &CoinId) -> String {
        format!("{}/coins/{}", self.client.base_url, coin_id.path_segment())
    }

    /// Historical prices for `range`, oldest first. May be empty.
    pub async fn price_series(&self, coin_id: &CoinId, range: TimeRange) -> Result<Vec<f64>, SdkError> {
        let chart = self.market_chart(coin_id, range).await?;
        Vec::<f64>::try_from(chart).map_err(validation)
    }

    pub async fn metadata(&self, coin_id: &CoinId) -> Result<CoinMetadata, SdkError> {
        let coin: CoinResponse = self.client.get(&self.coin_url(coin_id)).await?;
        Ok(coin.into())
    }

    /// Series and metadata fetched concurrently; fails if either request
    /// fails or the series is empty, and never returns half the data.
    pub async fn detail(&self, coin_id: &CoinId, range: TimeRange) -> Result<CoinDetail, SdkError> {
        let coin_url = self.coin_url(coin_id);
        let (chart, coin) = try_join(
            self.market_chart(coin_id, range),
            self.client.get::<CoinResponse>(&coin_url),
        )
        .await?;

        CoinDetail::try_from((chart, coin)).map_err(validation)
    }

    async fn market_chart(&self, coin_id: &CoinId, range: TimeRange) -> Result<MarketChartResponse, SdkError> {
        self.client.get(&self.market_chart_url(coin_id, range)).await
    }
}

fn validation(e: CoinValidationError) -> SdkError {
    SdkError::Validation(e.to_string())
}
