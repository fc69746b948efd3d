mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use common::{build_router_with, get, stub_state, SlowLotSizes};
use hkstocks_market_data::MarketDataError;
use hkstocks_server::config::Config;
use serde_json::json;

fn config_with_timeout(request_timeout: Duration) -> Config {
    Config {
        request_timeout,
        ..Config::default()
    }
}

fn source_timed_out() -> Result<u32, MarketDataError> {
    Err(MarketDataError::ProviderError {
        provider: "SLOW".to_string(),
        message: "operation timed out".to_string(),
    })
}

#[tokio::test]
async fn slow_request_is_json_gateway_timeout() {
    let mut state = stub_state("");
    state.lot_size_provider = Arc::new(SlowLotSizes {
        delay: Duration::from_millis(500),
        outcome: || Ok(400),
    });
    let app = build_router_with(state, config_with_timeout(Duration::from_millis(100)));

    let (status, body) = get(&app, "/5/lotsize").await;
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body, json!({ "code": 504, "message": "Request timed out" }));
}

#[tokio::test]
async fn source_timeout_within_request_budget_is_bad_gateway() {
    let mut state = stub_state("");
    state.lot_size_provider = Arc::new(SlowLotSizes {
        delay: Duration::from_millis(50),
        outcome: source_timed_out,
    });
    let app = build_router_with(state, config_with_timeout(Duration::from_secs(5)));

    let (status, body) = get(&app, "/5/lotsize").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], 502);
}

#[tokio::test]
async fn fast_request_is_unaffected_by_timeout() {
    let mut state = stub_state("");
    state.lot_size_provider = Arc::new(SlowLotSizes {
        delay: Duration::from_millis(10),
        outcome: || Ok(400),
    });
    let app = build_router_with(state, config_with_timeout(Duration::from_secs(5)));

    let (status, body) = get(&app, "/5/lotsize").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lot_size"], 400);
}
