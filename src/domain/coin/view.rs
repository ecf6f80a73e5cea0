//! Detail screen view model — everything the price card, stats grid, chart
//! and 24h range bar render, derived from a loaded [`CoinDetail`].
//!
//! Building a view is cheap and pure; `CoinDetailLoader::view_state` builds a
//! fresh one on each call.

use super::metrics::Sentiment;
use super::CoinDetail;
use crate::shared::{format_billions, format_currency, format_percent_abs};
use serde::Serialize;

/// Which stat a tile shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatKind {
    MarketCap,
    Volume24h,
    High24h,
    Low24h,
}

impl StatKind {
    pub fn label(&self) -> &'static str {
        match self {
            StatKind::MarketCap => "Market Cap",
            StatKind::Volume24h => "24h Volume",
            StatKind::High24h => "24h High",
            StatKind::Low24h => "24h Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatTile {
    pub kind: StatKind,
    pub value: f64,
    pub display: String,
}

/// 24h low/high bar with the current price marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeIndicator {
    pub low: f64,
    pub high: f64,
    /// Marker offset in `[0, 100]`.
    pub position: f64,
    pub low_display: String,
    pub high_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinDetailView {
    pub image_url: Option<String>,
    pub current_price: f64,
    pub current_price_display: String,
    pub first_price: f64,
    /// `None` when the first price of the series is zero.
    pub percent_change: Option<f64>,
    /// Unsigned, e.g. `10.00%`; pair with `is_positive` for the arrow.
    pub percent_change_display: Option<String>,
    pub sentiment: Option<Sentiment>,
    /// Drives the accent color. An unavailable change counts as positive.
    pub is_positive: bool,
    pub chart: Vec<f64>,
    /// Present, non-zero stats only, in grid order. Empty hides the grid.
    pub stats: Vec<StatTile>,
    /// Shown only when both the 24h high and low are known.
    pub range: Option<RangeIndicator>,
}

impl CoinDetailView {
    pub fn new(detail: &CoinDetail) -> Self {
        let current_price = detail.current_price();
        let percent_change = detail.percent_change();

        Self {
            image_url: detail.image_url.clone(),
            current_price,
            current_price_display: format_currency(current_price, 2),
            first_price: detail.first_price(),
            percent_change,
            percent_change_display: percent_change.map(format_percent_abs),
            sentiment: percent_change.map(Sentiment::from_percent_change),
            is_positive: percent_change.map_or(true, |p| p >= 0.0),
            chart: detail.price_series().to_vec(),
            stats: stat_tiles(detail),
            range: range_indicator(detail),
        }
    }
}

impl From<&CoinDetail> for CoinDetailView {
    fn from(detail: &CoinDetail) -> Self {
        Self::new(detail)
    }
}

fn stat_tiles(detail: &CoinDetail) -> Vec<StatTile> {
    [
        (StatKind::MarketCap, detail.market_cap),
        (StatKind::Volume24h, detail.volume_24h),
        (StatKind::High24h, detail.high_24h),
        (StatKind::Low24h, detail.low_24h),
    ]
    .into_iter()
    .filter_map(|(kind, value)| {
        let value = value.filter(|v| *v != 0.0)?;
        let display = match kind {
            StatKind::MarketCap | StatKind::Volume24h => format_billions(value),
            StatKind::High24h | StatKind::Low24h => format_currency(value, 2),
        };
        Some(StatTile {
            kind,
            value,
            display,
        })
    })
    .collect()
}

fn range_indicator(detail: &CoinDetail) -> Option<RangeIndicator> {
    let low = detail.low_24h?;
    let high = detail.high_24h?;
    Some(RangeIndicator {
        low,
        high,
        position: detail.range_position()?,
        low_display: format_currency(low, 2),
        high_display: format_currency(high, 2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coin::CoinMetadata;

    fn full_metadata() -> CoinMetadata {
        CoinMetadata {
            image_url: Some("https://example.com/eth.png".to_string()),
            market_cap: Some(410_000_000_000.0),
            volume_24h: Some(18_500_000_000.0),
            high_24h: Some(3_450.0),
            low_24h: Some(3_300.0),
        }
    }

    #[test]
    fn test_view_of_falling_series() {
        let detail = CoinDetail::new(vec![100.0, 110.0, 90.0], CoinMetadata::default()).unwrap();
        let view = CoinDetailView::new(&detail);
        assert_eq!(view.current_price, 90.0);
        assert_eq!(view.current_price_display, "$90.00");
        assert_eq!(view.percent_change, Some(-10.0));
        assert_eq!(view.percent_change_display.as_deref(), Some("10.00%"));
        assert_eq!(view.sentiment, Some(Sentiment::Bearish));
        assert!(!view.is_positive);
        assert_eq!(view.chart, vec![100.0, 110.0, 90.0]);
    }

    #[test]
    fn test_stats_grid_order_and_formatting() {
        let detail = CoinDetail::new(vec![3_400.0], full_metadata()).unwrap();
        let view = CoinDetailView::from(&detail);
        let shown: Vec<(StatKind, &str)> = view
            .stats
            .iter()
            .map(|t| (t.kind, t.display.as_str()))
            .collect();
        assert_eq!(
            shown,
            vec![
                (StatKind::MarketCap, "$410.00B"),
                (StatKind::Volume24h, "$18.50B"),
                (StatKind::High24h, "$3,450.00"),
                (StatKind::Low24h, "$3,300.00"),
            ]
        );
    }

    #[test]
    fn test_missing_and_zero_stats_are_hidden() {
        let meta = CoinMetadata {
            market_cap: Some(0.0),
            volume_24h: None,
            ..full_metadata()
        };
        let detail = CoinDetail::new(vec![3_400.0], meta).unwrap();
        let kinds: Vec<StatKind> = CoinDetailView::new(&detail).stats.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![StatKind::High24h, StatKind::Low24h]);

        let bare = CoinDetail::new(vec![1.0], CoinMetadata::default()).unwrap();
        assert!(CoinDetailView::new(&bare).stats.is_empty());
    }

    #[test]
    fn test_range_indicator_requires_both_bounds() {
        let detail = CoinDetail::new(vec![3_375.0], full_metadata()).unwrap();
        let range = CoinDetailView::new(&detail).range.unwrap();
        assert_eq!(range.position, 50.0);
        assert_eq!(range.low_display, "$3,300.00");

        let no_low = CoinMetadata {
            low_24h: None,
            ..full_metadata()
        };
        let detail = CoinDetail::new(vec![3_375.0], no_low).unwrap();
        assert!(CoinDetailView::new(&detail).range.is_none());
    }

    #[test]
    fn test_flat_24h_range_has_defined_marker() {
        let meta = CoinMetadata {
            high_24h: Some(50.0),
            low_24h: Some(50.0),
            ..CoinMetadata::default()
        };
        let detail = CoinDetail::new(vec![50.0], meta).unwrap();
        let range = CoinDetailView::new(&detail).range.unwrap();
        assert_eq!(range.position, 50.0);
    }

    #[test]
    fn test_zero_first_price_leaves_change_unavailable() {
        let detail = CoinDetail::new(vec![0.0, 1.0], CoinMetadata::default()).unwrap();
        let view = CoinDetailView::new(&detail);
        assert_eq!(view.percent_change, None);
        assert_eq!(view.sentiment, None);
        assert!(view.is_positive);
    }
}
