mod constituents;
mod dividends;
mod health;
mod lot_size;

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    error_handling::HandleErrorLayer,
    extract::{FromRequestParts, Path},
    http::{request::Parts, HeaderValue},
    BoxError, Router,
};
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use hkstocks_market_data::{MarketDataError, Ticker};

use crate::{config::Config, error::ApiError, main_lib::AppState};

/// Path segment name shared by every `/{..}/resource` route; the router
/// rejects different parameter names at the same position.
const SYMBOL_SEGMENT: &str = "{symbol}";

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    };

    let routes = Router::new()
        .merge(health::router())
        .merge(constituents::router())
        .merge(lot_size::router())
        .merge(dividends::router());

    let routes = if config.path_prefix.is_empty() {
        routes
    } else {
        Router::new().nest(&config.path_prefix, routes)
    };

    routes
        .fallback(|| async { ApiError::NotFound })
        .with_state(state)
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(config.request_timeout),
        )
        .layer(TraceLayer::new_for_http())
}

async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}

fn symbol_route(resource: &str) -> String {
    format!("/{}/{}", SYMBOL_SEGMENT, resource)
}

/// The `{symbol}` segment of a resource route.
///
/// A segment that does not percent-decode to UTF-8 is decoded lossily, so it
/// still reaches ticker or index validation and fails there with a 404.
struct SymbolPath(String);

impl<S: Send + Sync> FromRequestParts<S> for SymbolPath {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(symbol)) => Ok(Self(symbol)),
            Err(rejection) => {
                let segment = parts
                    .uri
                    .path()
                    .trim_start_matches('/')
                    .split('/')
                    .next()
                    .unwrap_or_default();
                tracing::debug!(%rejection, segment, "undecodable symbol segment");
                let bytes = urlencoding::decode_binary(segment.as_bytes());
                Ok(Self(String::from_utf8_lossy(&bytes).into_owned()))
            }
        }
    }
}

/// Lenient ticker normalization; input that is not a ticker is reported as
/// [`MarketDataError::InvalidTicker`] so it surfaces as a 404.
fn require_ticker(raw: &str) -> Result<Ticker, MarketDataError> {
    Ticker::parse_lenient(raw).ok_or_else(|| MarketDataError::InvalidTicker(raw.to_string()))
}
