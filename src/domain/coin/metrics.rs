//! Derived display values: percent change, sentiment, 24h range position.
//!
//! Degenerate denominators yield "unavailable" (`None`) instead of NaN or
//! infinity.

use serde::{Deserialize, Serialize};

/// Above this change (in percent) the trend is bullish.
pub const BULLISH_THRESHOLD: f64 = 5.0;
/// Below this change (in percent) the trend is bearish.
pub const BEARISH_THRESHOLD: f64 = -5.0;

/// Change from the first to the latest price, in percent.
///
/// `None` for an empty series or a zero first price.
pub fn percent_change(series: &[f64]) -> Option<f64> {
    let first = *series.first()?;
    let latest = *series.last()?;
    if first == 0.0 {
        return None;
    }
    let change = (latest - first) / first * 100.0;
    change.is_finite().then_some(change)
}

/// Position of `current` between `low` and `high`, in percent, clamped to
/// `[0, 100]`.
///
/// A flat range (`high == low`) puts the marker in the middle. An inverted
/// range or non-finite input is unavailable.
pub fn range_position(current: f64, low: f64, high: f64) -> Option<f64> {
    if !(current.is_finite() && low.is_finite() && high.is_finite()) || high < low {
        return None;
    }
    if high == low {
        return Some(50.0);
    }
    Some(((current - low) / (high - low) * 100.0).clamp(0.0, 100.0))
}

/// Coarse trend classification of a percent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl Sentiment {
    pub fn from_percent_change(change: f64) -> Self {
        if change > BULLISH_THRESHOLD {
            Sentiment::Bullish
        } else if change < BEARISH_THRESHOLD {
            Sentiment::Bearish
        } else {
            Sentiment::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "Strong Bullish",
            Sentiment::Bearish => "Bearish Trend",
            Sentiment::Neutral => "Stable Market",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "🚀",
            Sentiment::Bearish => "📉",
            Sentiment::Neutral => "⚖️",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}
