//! Reference data provider abstractions and implementations.
//!
//! This module contains:
//! - One trait per kind of reference data (lot size, dividends, constituents)
//! - The shared [`HttpFetcher`] used by the document-based providers
//! - Concrete providers for HKEX, Hang Seng Indexes and AASTOCKS
//!
//! Providers receive an already-normalized [`Ticker`](crate::models::Ticker)
//! or [`HangSengIndex`](crate::models::HangSengIndex); input validation
//! happens before they are called.

mod http;
mod traits;

pub mod aastocks;
pub mod hkex;
pub mod hsi;

pub use http::{HttpFetcher, DEFAULT_TIMEOUT};
pub use traits::{ConstituentProvider, DividendProvider, LotSizeProvider};
