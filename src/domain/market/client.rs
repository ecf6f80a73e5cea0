//! Markets sub-client — the ranked coin listing.

use crate::client::CoinGeckoClient;
use crate::domain::market::wire::MarketsResponse;
use crate::domain::market::{CoinSummary, MarketValidationError};
use crate::error::SdkError;
use crate::network::{MARKET_ORDER, MARKET_PAGE_SIZE, VS_CURRENCY};

/// Sub-client for market listing operations.
pub struct Markets<'a> {
    pub(crate) client: &'a CoinGeckoClient,
}

impl<'a> Markets<'a> {
    /// URL of the first listing page: USD prices, market cap ranking,
    /// no sparkline.
    pub fn listing_url(&self) -> String {
        format!(
            "{}/coins/markets?vs_currency={}&order={}&per_page={}&page=1&sparkline=false",
            self.client.base_url, VS_CURRENCY, MARKET_ORDER, MARKET_PAGE_SIZE
        )
    }

    /// Fetch the listing in server order.
    ///
    /// Fails closed: one invalid record rejects the whole snapshot.
    pub async fn list(&self) -> Result<Vec<CoinSummary>, SdkError> {
        let resp: MarketsResponse = self.client.get(&self.listing_url()).await?;
        resp.into_iter()
            .enumerate()
            .map(|(rank, record)| {
                CoinSummary::try_from(record).map_err(|e: MarketValidationError| {
                    SdkError::Validation(format!("listing row {}: {}", rank + 1, e))
                })
            })
            .collect()
    }
}
