//! HKStocks Market Data Crate
//!
//! Reference data for Hong Kong listed securities: board lot sizes, dividend
//! history and Hang Seng index constituents.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Raw input      | --> |    Resolver      |  ("5", "0005.HK", "5 HK")
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |     Ticker       |  (canonical identity)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Provider      |  (HKEX, HSI, AASTOCKS)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |     Tables       |  (xls/xlsx, HTML)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |     Record       |  (header-keyed rows)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Ticker`] - Canonical Hong Kong ticker, printed as a 4-digit code
//! - [`HangSengIndex`] - Supported indexes with display name and source
//! - [`Record`] - One provider row keyed by column header
//! - [`MarketDataError`] - Error type shared by every operation

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;
pub mod tables;

pub use errors::MarketDataError;
pub use models::{HangSengIndex, Record, Ticker};
pub use resolver::{parse_hk_ticker, ParseMode};

pub use provider::aastocks::AastocksDividendProvider;
pub use provider::hkex::HkexLotSizeProvider;
pub use provider::hsi::HangSengConstituentProvider;
pub use provider::{
    ConstituentProvider, DividendProvider, HttpFetcher, LotSizeProvider, DEFAULT_TIMEOUT,
};
