use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::SymbolPath;
use crate::{error::ApiResult, main_lib::AppState, models::LotSizeResult};

async fn lookup_lot_size(
    SymbolPath(raw): SymbolPath,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<LotSizeResult>> {
    let ticker = super::require_ticker(&raw)?;
    let lot_size = state.lot_size_provider.get_lot_size(&ticker).await?;
    Ok(Json(LotSizeResult { ticker, lot_size }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(&super::symbol_route("lotsize"), get(lookup_lot_size))
}
