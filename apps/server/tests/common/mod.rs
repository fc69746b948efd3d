#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use hkstocks_market_data::{
    ConstituentProvider, DividendProvider, HangSengIndex, LotSizeProvider, MarketDataError,
    Record, Ticker,
};
use hkstocks_server::{api::app_router, config::Config, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

pub struct StubLotSizes(pub HashMap<u32, u32>);

#[async_trait]
impl LotSizeProvider for StubLotSizes {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn get_lot_size(&self, ticker: &Ticker) -> Result<u32, MarketDataError> {
        self.0
            .get(&ticker.code())
            .copied()
            .ok_or_else(|| MarketDataError::SymbolNotFound(ticker.hkex_code()))
    }
}

/// Records every `ex_date_after` it is handed.
#[derive(Default)]
pub struct StubDividends {
    pub seen_filters: Mutex<Vec<String>>,
}

#[async_trait]
impl DividendProvider for StubDividends {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn get_dividends(
        &self,
        ticker: &Ticker,
        ex_date_after: &str,
    ) -> Result<Vec<Record>, MarketDataError> {
        self.seen_filters
            .lock()
            .unwrap()
            .push(ex_date_after.to_string());
        if ex_date_after == "not-a-date" {
            return Err(MarketDataError::InvalidDate(ex_date_after.to_string()));
        }
        let record = json!({
            "Event": "Final Dividend",
            "Particular": format!("D:HKD 1.00 ({})", ticker),
            "Ex-Date": "2024/03/07",
        });
        Ok(vec![record.as_object().unwrap().clone()])
    }
}

pub struct StubConstituents;

#[async_trait]
impl ConstituentProvider for StubConstituents {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn get_constituents(
        &self,
        _index: &HangSengIndex,
    ) -> Result<Vec<Record>, MarketDataError> {
        let rows = json!([
            { "Stock Code": "0006", "Stock Name": "POWER ASSETS" },
            { "Stock Code": "0345", "Stock Name": "VITASOY INT'L" },
        ]);
        Ok(rows
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r.as_object().unwrap().clone())
            .collect())
    }
}

/// Fails every call the way an unreachable upstream would.
pub struct Unavailable;

fn unavailable() -> MarketDataError {
    MarketDataError::ProviderError {
        provider: "STUB".to_string(),
        message: "HTTP error: 503 Service Unavailable".to_string(),
    }
}

#[async_trait]
impl LotSizeProvider for Unavailable {
    fn id(&self) -> &'static str {
        "UNAVAILABLE"
    }

    async fn get_lot_size(&self, _ticker: &Ticker) -> Result<u32, MarketDataError> {
        Err(unavailable())
    }
}

#[async_trait]
impl DividendProvider for Unavailable {
    fn id(&self) -> &'static str {
        "UNAVAILABLE"
    }

    async fn get_dividends(
        &self,
        _ticker: &Ticker,
        _ex_date_after: &str,
    ) -> Result<Vec<Record>, MarketDataError> {
        Err(unavailable())
    }
}

#[async_trait]
impl ConstituentProvider for Unavailable {
    fn id(&self) -> &'static str {
        "UNAVAILABLE"
    }

    async fn get_constituents(
        &self,
        _index: &HangSengIndex,
    ) -> Result<Vec<Record>, MarketDataError> {
        Err(unavailable())
    }
}

/// Answers after `delay`, with `outcome` once the delay has passed.
pub struct SlowLotSizes {
    pub delay: Duration,
    pub outcome: fn() -> Result<u32, MarketDataError>,
}

#[async_trait]
impl LotSizeProvider for SlowLotSizes {
    fn id(&self) -> &'static str {
        "SLOW"
    }

    async fn get_lot_size(&self, _ticker: &Ticker) -> Result<u32, MarketDataError> {
        tokio::time::sleep(self.delay).await;
        (self.outcome)()
    }
}

pub fn lot_sizes() -> StubLotSizes {
    StubLotSizes(HashMap::from([(5, 400), (700, 100), (2800, 500)]))
}

pub fn build_router(state: AppState) -> Router {
    let config = Config {
        path_prefix: state.path_prefix.clone(),
        ..Config::default()
    };
    build_router_with(state, config)
}

pub fn build_router_with(state: AppState, config: Config) -> Router {
    app_router(Arc::new(state), &config)
}

pub fn stub_state(prefix: &str) -> AppState {
    AppState {
        lot_size_provider: Arc::new(lot_sizes()),
        dividend_provider: Arc::new(StubDividends::default()),
        constituent_provider: Arc::new(StubConstituents),
        path_prefix: prefix.to_string(),
    }
}

pub fn unavailable_state() -> AppState {
    AppState {
        lot_size_provider: Arc::new(Unavailable),
        dividend_provider: Arc::new(Unavailable),
        constituent_provider: Arc::new(Unavailable),
        path_prefix: String::new(),
    }
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
