//! Reference data provider trait definitions.
//!
//! Each kind of reference data has its own trait so a deployment (or a test)
//! can swap one source without touching the others. Implementations must be
//! `Send + Sync`; the server shares them across requests behind an `Arc`.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{HangSengIndex, Record, Ticker};

/// Board lot (minimum trading unit) lookup.
#[async_trait]
pub trait LotSizeProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Number of shares in one board lot of `ticker`.
    ///
    /// Returns [`MarketDataError::SymbolNotFound`] when the ticker has no
    /// listing at this provider.
    async fn get_lot_size(&self, ticker: &Ticker) -> Result<u32, MarketDataError>;
}

/// Dividend history, including announced but not yet paid dividends.
#[async_trait]
pub trait DividendProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Dividend records for `ticker` with an ex-date on or after
    /// `ex_date_after`.
    ///
    /// `ex_date_after` is passed through from the caller untouched; the
    /// provider owns its interpretation and reports
    /// [`MarketDataError::InvalidDate`] when it cannot read it.
    async fn get_dividends(
        &self,
        ticker: &Ticker,
        ex_date_after: &str,
    ) -> Result<Vec<Record>, MarketDataError>;
}

/// Index constituent lists.
#[async_trait]
pub trait ConstituentProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Current constituents of `index`, one record per security.
    async fn get_constituents(&self, index: &HangSengIndex)
        -> Result<Vec<Record>, MarketDataError>;
}
