//! Market data models
//!
//! - `ticker` - Canonical Hong Kong ticker (Ticker)
//! - `index` - Supported Hang Seng indexes and their metadata (HangSengIndex)
//! - `record` - Header-keyed provider rows (Record) and cell conversions

mod index;
mod record;
mod ticker;

pub use index::HangSengIndex;
pub use record::{text_value, value_text, Record};
pub use ticker::Ticker;
