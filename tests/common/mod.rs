//! Stub transport shared by the integration tests.
//!
//! Routes match on the URL path (host and query stripped) plus an optional
//! query fragment. Later routes shadow earlier ones, so a test can swap a
//! reply between fetches.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Notify;

use coinscope_sdk::client::CoinGeckoClient;
use coinscope_sdk::error::HttpError;
use coinscope_sdk::http::Fetcher;

pub const BASE_URL: &str = "http://stub.test/api/v3";

#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Status(u16, String),
}

struct Route {
    path: String,
    query: Option<String>,
    reply: Reply,
    gate: Option<Arc<Notify>>,
}

#[derive(Default)]
pub struct StubFetcher {
    routes: Mutex<Vec<Route>>,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn route(&self, path: &str, reply: Reply) {
        self.push(path, None, reply, None);
    }

    pub fn route_query(&self, path: &str, query: &str, reply: Reply) {
        self.push(path, Some(query), reply, None);
    }

    /// Like [`route`](Self::route), but the reply is held back until the
    /// returned gate is notified.
    pub fn gated_route(&self, path: &str, reply: Reply) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.push(path, None, reply, Some(gate.clone()));
        gate
    }

    /// Like [`route_query`](Self::route_query), but the reply is held back
    /// until the returned gate is notified.
    pub fn gated_route_query(&self, path: &str, query: &str, reply: Reply) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.push(path, Some(query), reply, Some(gate.clone()));
        gate
    }

    fn push(&self, path: &str, query: Option<&str>, reply: Reply, gate: Option<Arc<Notify>>) {
        self.routes.lock().unwrap().push(Route {
            path: path.to_string(),
            query: query.map(str::to_string),
            reply,
            gate,
        });
    }

    /// Every URL requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_called(&self, fragment: &str) -> bool {
        self.calls().iter().any(|url| url.contains(fragment))
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, HttpError> {
        let rest = url.strip_prefix(BASE_URL).unwrap_or(url);
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        let found = {
            let routes = self.routes.lock().unwrap();
            routes
                .iter()
                .rev()
                .find(|r| r.path == path && r.query.as_deref().map_or(true, |q| query.contains(q)))
                .map(|r| (r.reply.clone(), r.gate.clone()))
        };
        self.calls.lock().unwrap().push(url.to_string());

        let Some((reply, gate)) = found else {
            return Err(HttpError::NotFound(url.to_string()));
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }

        match reply {
            Reply::Json(body) => Ok(body),
            Reply::Status(status, body) => Err(HttpError::from_status(status, body, None)),
        }
    }
}

pub fn client(stub: &Arc<StubFetcher>) -> CoinGeckoClient {
    CoinGeckoClient::builder()
        .base_url(BASE_URL)
        .fetcher(stub.clone())
        .build()
        .expect("stub client should build")
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

pub fn market_record(id: &str, name: &str, symbol: &str, price: f64, change: f64) -> Value {
    json!({
        "id": id,
        "symbol": symbol,
        "name": name,
        "image": format!("https://assets.example/{id}.png"),
        "current_price": price,
        "market_cap": 1_000_000_000u64,
        "market_cap_rank": 1,
        "price_change_percentage_24h": change,
    })
}

/// `market_chart` body with one `[timestamp, price]` pair per price.
pub fn chart(prices: &[f64]) -> Value {
    let pairs: Vec<Value> = prices
        .iter()
        .enumerate()
        .map(|(i, p)| json!([1_700_000_000_000u64 + i as u64 * 3_600_000, p]))
        .collect();
    json!({ "prices": pairs, "market_caps": [], "total_volumes": [] })
}

pub fn coin(id: &str) -> Value {
    json!({
        "id": id,
        "symbol": "btc",
        "name": "Bitcoin",
        "image": {
            "thumb": format!("https://assets.example/{id}-thumb.png"),
            "small": format!("https://assets.example/{id}-small.png"),
            "large": format!("https://assets.example/{id}-large.png"),
        },
        "market_data": {
            "market_cap": { "usd": 850_000_000_000.0 },
            "total_volume": { "usd": 32_000_000_000.0 },
            "high_24h": { "usd": 44_000.0 },
            "low_24h": { "usd": 42_000.0 },
        }
    })
}
