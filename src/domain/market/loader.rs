//! Market list loader — app-owned handle, SDK-provided fetch logic.

use super::CoinSummary;
use crate::client::CoinGeckoClient;

use async_lock::RwLock;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Backs the market list screen.
///
/// Never surfaces an error to the view: a failed fetch leaves an empty list
/// and records the message in [`last_error`](Self::last_error) for
/// diagnostics. Clones share state.
#[derive(Clone)]
pub struct MarketListLoader {
    client: CoinGeckoClient,
    inner: Arc<RwLock<ListState>>,
}

#[derive(Debug, Default)]
struct ListState {
    coins: Vec<CoinSummary>,
    last_error: Option<String>,
    fetched_at: Option<DateTime<Utc>>,
    loading: bool,
    /// Ticket of the most recently started fetch.
    generation: u64,
}

impl MarketListLoader {
    pub fn new(client: CoinGeckoClient) -> Self {
        Self {
            client,
            inner: Arc::new(RwLock::new(ListState::default())),
        }
    }

    /// Fetch the listing and replace the current list wholesale.
    ///
    /// Returns the list as it stands after this fetch settles. When a newer
    /// fetch started in the meantime, this result is dropped and the newer
    /// fetch decides the list. Dropping the future before it settles leaves
    /// the list untouched and clears the loading flag.
    pub async fn load(&self) -> Vec<CoinSummary> {
        let mut pending = {
            let mut state = self.inner.write().await;
            state.generation += 1;
            state.loading = true;
            Pending {
                inner: &self.inner,
                ticket: state.generation,
                armed: true,
            }
        };

        let result = self.client.markets().list().await;

        let mut state = self.inner.write().await;
        pending.armed = false;
        if state.generation != pending.ticket {
            tracing::debug!(ticket = pending.ticket, latest = state.generation, "Discarding superseded market list");
            return state.coins.clone();
        }

        state.loading = false;
        match result {
            Ok(coins) => {
                tracing::debug!(count = coins.len(), "Market list loaded");
                state.coins = coins;
                state.last_error = None;
                state.fetched_at = Some(Utc::now());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Market list fetch failed");
                state.coins.clear();
                state.last_error = Some(e.to_string());
            }
        }
        state.coins.clone()
    }

    /// User-initiated refresh; same fetch as [`load`](Self::load).
    pub async fn refresh(&self) -> Vec<CoinSummary> {
        self.load().await
    }

    pub async fn coins(&self) -> Vec<CoinSummary> {
        self.inner.read().await.coins.clone()
    }

    /// Message of the last failed fetch, cleared by the next success.
    pub async fn last_error(&self) -> Option<String> {
        self.inner.read().await.last_error.clone()
    }

    /// When the current list was fetched; `None` before the first success.
    pub async fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().await.fetched_at
    }

    /// True while a fetch is in flight (drives a refresh spinner).
    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.loading
    }
}

/// One started fetch. Dropped while still armed (the caller abandoned the
/// future), it clears the loading flag unless a newer fetch has taken over.
struct Pending<'a> {
    inner: &'a RwLock<ListState>,
    ticket: u64,
    armed: bool,
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        // Lock holders never await, so a contended lock is released shortly.
        let mut state = match self.inner.try_write() {
            Some(state) => state,
            None => self.inner.write_blocking(),
        };
        if state.generation == self.ticket {
            tracing::debug!(ticket = self.ticket, "Market list fetch abandoned");
            state.loading = false;
        }
    }
}
