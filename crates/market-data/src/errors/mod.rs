//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers both caller mistakes (a ticker that does not
//! normalize, an index outside the catalog) and upstream failures raised while
//! fetching or parsing provider documents. [`MarketDataError::is_upstream`]
//! separates the two so the HTTP layer can pick a status code.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The raw input does not reduce to a canonical Hong Kong ticker.
    #[error("invalid ticker: {0}")]
    InvalidTicker(String),

    /// The requested index is not part of the supported catalog.
    #[error("invalid index: {symbol}; must be one of {supported:?}")]
    UnknownIndex {
        /// The uppercased symbol that was requested
        symbol: String,
        /// Symbols of every supported index
        supported: Vec<&'static str>,
    },

    /// The ticker is well formed but the provider has no listing for it.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// A date filter could not be interpreted by the provider.
    #[error("invalid date: {0}; expected mm/dd/yyyy")]
    InvalidDate(String),

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// A provider-specific error occurred (bad status, transport failure).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider answered but its document could not be read.
    #[error("Parse failed: {provider} - {message}")]
    ParseFailed {
        /// The provider whose document failed to parse
        provider: String,
        /// What was wrong with the document
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns `true` when the error originates from an upstream source
    /// rather than from the caller's input.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. }
                | Self::ProviderError { .. }
                | Self::ParseFailed { .. }
                | Self::Network(_)
        )
    }

    pub(crate) fn provider(provider: &str, message: impl Into<String>) -> Self {
        Self::ProviderError {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn parse(provider: &str, message: impl Into<String>) -> Self {
        Self::ParseFailed {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}
