//! Live tests against the public CoinGecko API.
//!
//! All tests are `#[ignore]` because they require network access and are
//! subject to the public rate limit. A `COINGECKO_API_KEY` (demo key) is
//! picked up from the environment or a `.env` file when present.
//!
//! Run with:
//! ```bash
//! cargo test --test live_coingecko -- --ignored
//! ```

use coinscope_sdk::prelude::*;

fn live_client() -> CoinGeckoClient {
    dotenvy::dotenv().ok();

    let mut builder = CoinGeckoClient::builder().retry_policy(RetryPolicy::Idempotent);
    if let Ok(key) = std::env::var("COINGECKO_API_KEY") {
        builder = builder.api_key(ApiKey::Demo(key));
    }
    builder.build().expect("client should build")
}

#[tokio::test]
#[ignore]
async fn test_live_market_listing() {
    let coins = live_client().markets().list().await.expect("listing should load");

    assert!(!coins.is_empty());
    assert!(coins.len() <= 20);
    assert!(coins.iter().any(|c| c.id.as_str() == "bitcoin"));
    assert!(coins.iter().all(|c| c.current_price > 0.0));
}

#[tokio::test]
#[ignore]
async fn test_live_bitcoin_detail() {
    let loader = live_client().coin_detail_loader("bitcoin", TimeRange::OneWeek);
    assert_eq!(loader.load().await, FetchOutcome::Applied);

    let state = loader.view_state().await;
    let view = state.data().unwrap_or_else(|| panic!("expected data, got {state:?}"));
    assert!(view.chart.len() > 1);
    assert!(view.current_price > 0.0);
    assert!(view.percent_change.is_some());
}
