//! Coin detail loader — drives the detail screen through
//! `Idle → Loading → Success | Error`.
//!
//! Every fetch takes a generation ticket under the state lock. When the
//! result arrives, it is applied only if its ticket is still the latest, so
//! a slow request can never overwrite the outcome of a newer one.

use super::view::CoinDetailView;
use super::CoinDetail;
use crate::client::CoinGeckoClient;
use crate::shared::{CoinId, LoadState, TimeRange};

use async_lock::RwLock;
use std::sync::Arc;

/// What happened to the result of one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The result became the loader's state.
    Applied,
    /// A newer fetch started before this one finished; result dropped.
    Superseded,
    /// The requested range was already selected; nothing fetched.
    Unchanged,
}

/// Backs one coin detail screen. Clones share state.
#[derive(Clone)]
pub struct CoinDetailLoader {
    client: CoinGeckoClient,
    inner: Arc<RwLock<DetailState>>,
}

#[derive(Debug)]
struct DetailState {
    coin_id: CoinId,
    range: TimeRange,
    state: LoadState<CoinDetail>,
    generation: u64,
}

impl CoinDetailLoader {
    /// A loader in `Idle`; nothing is fetched until [`load`](Self::load).
    pub fn new(client: CoinGeckoClient, coin_id: CoinId, range: TimeRange) -> Self {
        Self {
            client,
            inner: Arc::new(RwLock::new(DetailState {
                coin_id,
                range,
                state: LoadState::Idle,
                generation: 0,
            })),
        }
    }

    pub async fn coin_id(&self) -> CoinId {
        self.inner.read().await.coin_id.clone()
    }

    pub async fn range(&self) -> TimeRange {
        self.inner.read().await.range
    }

    pub async fn state(&self) -> LoadState<CoinDetail> {
        self.inner.read().await.state.clone()
    }

    /// State with derived display values in place of the raw detail.
    pub async fn view_state(&self) -> LoadState<CoinDetailView> {
        let state = self.inner.read().await;
        match &state.state {
            LoadState::Idle => LoadState::Idle,
            LoadState::Loading => LoadState::Loading,
            LoadState::Success(detail) => LoadState::Success(CoinDetailView::new(detail)),
            LoadState::Error(message) => LoadState::Error(message.clone()),
        }
    }

    /// Fetch series and metadata for the current `(coin, range)`.
    ///
    /// Dropping the future of this or any other fetch before it settles
    /// restores the range and state from before the fetch.
    pub async fn load(&self) -> FetchOutcome {
        let pending = {
            let mut state = self.inner.write().await;
            let range = state.range;
            self.begin(&mut state, range)
        };
        self.finish(pending).await
    }

    /// Select another range. Refetches both requests from `Loading`; the
    /// previous series is dropped immediately.
    ///
    /// Reselecting the range of a settled load (`Success` or `Error`) is a
    /// no-op.
    pub async fn set_range(&self, range: TimeRange) -> FetchOutcome {
        let pending = {
            let mut state = self.inner.write().await;
            let settled = matches!(state.state, LoadState::Success(_) | LoadState::Error(_));
            if state.range == range && settled {
                return FetchOutcome::Unchanged;
            }
            self.begin(&mut state, range)
        };
        self.finish(pending).await
    }

    /// Manual retry with the last-known `(coin, range)`.
    pub async fn refetch(&self) -> FetchOutcome {
        self.load().await
    }

    fn begin(&self, state: &mut DetailState, range: TimeRange) -> Pending<'_> {
        state.generation += 1;
        let prior_range = std::mem::replace(&mut state.range, range);
        let prior_state = std::mem::replace(&mut state.state, LoadState::Loading);
        Pending {
            inner: &self.inner,
            ticket: state.generation,
            coin_id: state.coin_id.clone(),
            range,
            prior: Some((prior_range, prior_state)),
        }
    }

    async fn finish(&self, mut pending: Pending<'_>) -> FetchOutcome {
        let result = self.client.coins().detail(&pending.coin_id, pending.range).await;

        let mut state = self.inner.write().await;
        pending.settle();
        let (ticket, coin_id, range) = (pending.ticket, &pending.coin_id, pending.range);

        if state.generation != ticket {
            tracing::debug!(
                coin = %coin_id,
                range = %range,
                ticket,
                latest = state.generation,
                "Discarding superseded coin detail"
            );
            return FetchOutcome::Superseded;
        }

        state.state = match result {
            Ok(detail) => {
                tracing::debug!(coin = %coin_id, range = %range, points = detail.price_series().len(), "Coin detail loaded");
                LoadState::Success(detail)
            }
            Err(e) => {
                tracing::warn!(coin = %coin_id, range = %range, error = %e, "Coin detail fetch failed");
                LoadState::Error(e.to_string())
            }
        };
        FetchOutcome::Applied
    }
}

/// One started fetch. Dropped unsettled (the caller abandoned the future),
/// it rolls the loader back to its range and state from before the fetch,
/// unless a newer fetch has taken over.
struct Pending<'a> {
    inner: &'a RwLock<DetailState>,
    ticket: u64,
    coin_id: CoinId,
    range: TimeRange,
    prior: Option<(TimeRange, LoadState<CoinDetail>)>,
}

impl Pending<'_> {
    fn settle(&mut self) {
        self.prior = None;
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        let Some((range, prior)) = self.prior.take() else {
            return;
        };
        // Lock holders never await, so a contended lock is released shortly.
        let mut state = match self.inner.try_write() {
            Some(state) => state,
            None => self.inner.write_blocking(),
        };
        if state.generation == self.ticket {
            tracing::debug!(coin = %self.coin_id, range = %self.range, ticket = self.ticket, "Coin detail fetch abandoned");
            state.range = range;
            state.state = prior;
        }
    }
}
