//! HKEX board lot provider.
//!
//! Reads the "List of Securities" workbook HKEX publishes daily. The sheet has
//! a couple of title lines, then a header row with (among others) `Stock Code`
//! and `Board Lot`.
//!
//! # Source
//!
//! `https://www.hkex.com.hk/eng/services/trading/securities/securitieslists/ListOfSecurities.xlsx`

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::errors::MarketDataError;
use crate::models::{value_text, Ticker};
use crate::provider::{HttpFetcher, LotSizeProvider};
use crate::tables::{spreadsheet, Table};

pub const PROVIDER_ID: &str = "HKEX";

pub const DEFAULT_SECURITIES_LIST_URL: &str =
    "https://www.hkex.com.hk/eng/services/trading/securities/securitieslists/ListOfSecurities.xlsx";

const STOCK_CODE: &str = "Stock Code";
const BOARD_LOT: &str = "Board Lot";

/// Board lot lookup backed by the HKEX securities list.
pub struct HkexLotSizeProvider {
    fetcher: HttpFetcher,
    url: String,
}

impl HkexLotSizeProvider {
    pub fn new(fetcher: HttpFetcher, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }
}

#[async_trait]
impl LotSizeProvider for HkexLotSizeProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_lot_size(&self, ticker: &Ticker) -> Result<u32, MarketDataError> {
        let bytes = self.fetcher.get_bytes(PROVIDER_ID, &self.url).await?;
        let grid = spreadsheet::read_first_sheet(bytes, PROVIDER_ID)?;
        let table = Table::from_grid(grid, STOCK_CODE, PROVIDER_ID)?;
        lot_size_from_table(&table, ticker).inspect_err(|e| {
            if e.is_upstream() {
                warn!(provider = PROVIDER_ID, %ticker, error = %e, "securities list unusable");
            }
        })
    }
}

/// Find `ticker` in a securities list and read its board lot.
pub(crate) fn lot_size_from_table(table: &Table, ticker: &Ticker) -> Result<u32, MarketDataError> {
    let code_column = table
        .column(STOCK_CODE)
        .ok_or_else(|| MarketDataError::parse(PROVIDER_ID, "no 'Stock Code' column"))?;
    let lot_column = table
        .column(BOARD_LOT)
        .ok_or_else(|| MarketDataError::parse(PROVIDER_ID, "no 'Board Lot' column"))?;

    let row = table
        .rows()
        .find(|row| {
            Ticker::parse_lenient(&value_text(Table::cell(row, code_column))) == Some(*ticker)
        })
        .ok_or_else(|| MarketDataError::SymbolNotFound(ticker.hkex_code()))?;

    let lot = Table::cell(row, lot_column);
    parse_board_lot(lot).ok_or_else(|| {
        MarketDataError::parse(
            PROVIDER_ID,
            format!("unreadable board lot '{}' for {}", value_text(lot), ticker),
        )
    })
}

/// Board lots are printed with thousands separators (`"2,000"`).
fn parse_board_lot(value: &Value) -> Option<u32> {
    let digits: String = value_text(value)
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    digits.parse().ok()
}
