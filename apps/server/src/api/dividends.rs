use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::SymbolPath;
use crate::{error::ApiResult, main_lib::AppState, models::DivResult};

pub(super) const DEFAULT_EX_DATE_AFTER: &str = "1/1/2020";

#[derive(Deserialize)]
struct DividendsQuery {
    /// mm/dd/yyyy; handed to the provider as-is.
    #[serde(default = "default_ex_date_after")]
    ex_date_after: String,
}

fn default_ex_date_after() -> String {
    DEFAULT_EX_DATE_AFTER.to_string()
}

async fn get_dividends(
    SymbolPath(raw): SymbolPath,
    Query(q): Query<DividendsQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DivResult>> {
    let ticker = super::require_ticker(&raw)?;
    let dividends = state
        .dividend_provider
        .get_dividends(&ticker, &q.ex_date_after)
        .await?;
    Ok(Json(DivResult { ticker, dividends }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(&super::symbol_route("dividends"), get(get_dividends))
}
