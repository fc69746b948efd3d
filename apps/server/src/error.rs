use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hkstocks_market_data::MarketDataError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MarketData(#[from] MarketDataError),
    #[error("Not Found")]
    NotFound,
    #[error("Request timed out")]
    Timeout,
    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MarketData(e) => match e {
                MarketDataError::InvalidTicker(_)
                | MarketDataError::UnknownIndex { .. }
                | MarketDataError::SymbolNotFound(_) => StatusCode::NOT_FOUND,
                MarketDataError::InvalidDate(_) => StatusCode::BAD_REQUEST,
                MarketDataError::RateLimited { .. }
                | MarketDataError::ProviderError { .. }
                | MarketDataError::ParseFailed { .. }
                | MarketDataError::Network(_) => StatusCode::BAD_GATEWAY,
            },
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::MarketData(e) if e.is_upstream() => {
                tracing::warn!(error = %e, "upstream provider failed");
            }
            ApiError::Timeout | ApiError::Internal(_) => {
                tracing::warn!(error = %self, "request aborted");
            }
            _ => {}
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
