use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{
    main_lib::AppState,
    models::{ApiDocs, EndpointDoc, HealthStatus, ParameterDoc},
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const TICKER_DESCRIPTION: &str =
    "numeric stock code (5) or yahoo (5.hk) or Bloomberg format (e.g. 5 HK)";

/// Fixed status payload; independent of provider state.
async fn read_root(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        version: VERSION,
        status: "Healthy",
        message: format!("see {}/docs/ endpoint for help", state.path_prefix),
    })
}

async fn read_docs(State(state): State<Arc<AppState>>) -> Json<ApiDocs> {
    let prefix = state.path_prefix.as_str();
    let ticker = || ParameterDoc {
        name: "ticker",
        location: "path",
        description: TICKER_DESCRIPTION,
        default: None,
    };

    Json(ApiDocs {
        title: "HKStocks API",
        description: "free API to get Hong Kong List Stocks data",
        version: VERSION,
        endpoints: vec![
            EndpointDoc {
                method: "GET",
                path: format!("{}/{{index}}/constituents", prefix),
                summary: "get Hang Seng Index Constituents",
                parameters: vec![ParameterDoc {
                    name: "index",
                    location: "path",
                    description: "Hang Seng Index Symbol, currently only support HCS",
                    default: Some("HCS"),
                }],
            },
            EndpointDoc {
                method: "GET",
                path: format!("{}/{{ticker}}/lotsize", prefix),
                summary: "get lot size (minimum trading unit)",
                parameters: vec![ticker()],
            },
            EndpointDoc {
                method: "GET",
                path: format!("{}/{{ticker}}/dividends", prefix),
                summary: "get dividend history, including upcoming",
                parameters: vec![
                    ticker(),
                    ParameterDoc {
                        name: "ex_date_after",
                        location: "query",
                        description: "only show history after this date, in mm/dd/yyyy format",
                        default: Some(super::dividends::DEFAULT_EX_DATE_AFTER),
                    },
                ],
            },
        ],
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(read_root))
        .route("/docs", get(read_docs))
        .route("/docs/", get(read_docs))
}
