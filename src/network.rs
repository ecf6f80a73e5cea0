//! Network URL constants and fixed query parameters for the CoinGecko API.

/// Default (public) REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// REST API base URL for paid-plan keys.
pub const PRO_API_URL: &str = "https://pro-api.coingecko.com/api/v3";

/// Fiat currency every price is quoted in.
pub const VS_CURRENCY: &str = "usd";

/// Sort order of the market listing (server-side ranking).
pub const MARKET_ORDER: &str = "market_cap_desc";

/// Number of coins in the market listing.
pub const MARKET_PAGE_SIZE: u32 = 20;
