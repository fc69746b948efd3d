//! Symbol resolution for Hong Kong listings.
//!
//! Callers hand over whatever the user typed (`5`, `0005.HK`, `5 HK`) and get
//! back a canonical [`Ticker`](crate::models::Ticker), or a signal that the
//! input is not a ticker. See [`parse_hk_ticker`].

mod hk_ticker;

pub use hk_ticker::{parse_hk_ticker, ParseMode};
