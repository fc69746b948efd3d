use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use hkstocks_market_data::HangSengIndex;

use super::SymbolPath;
use crate::{error::ApiResult, main_lib::AppState, models::ConstituentResult};

async fn get_hsi_constituents(
    SymbolPath(index): SymbolPath,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ConstituentResult>> {
    let index = HangSengIndex::from_symbol(&index)?;
    let constituents = state.constituent_provider.get_constituents(&index).await?;
    Ok(Json(ConstituentResult {
        index: index.symbol(),
        name: index.name(),
        constituents,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(&super::symbol_route("constituents"), get(get_hsi_constituents))
}
