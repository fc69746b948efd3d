//! Hang Seng Indexes constituent provider.
//!
//! Each [`HangSengIndex`] points at the workbook Hang Seng Indexes publishes
//! for it. Rows are returned keyed by the workbook header, with the stock code
//! rewritten to the canonical ticker string.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{value_text, HangSengIndex, Record, Ticker};
use crate::provider::{ConstituentProvider, HttpFetcher};
use crate::tables::{spreadsheet, Table};

pub const PROVIDER_ID: &str = "HSI";

const STOCK_CODE: &str = "Stock Code";

/// Constituent lists downloaded from each index's source workbook.
pub struct HangSengConstituentProvider {
    fetcher: HttpFetcher,
}

impl HangSengConstituentProvider {
    pub fn new(fetcher: HttpFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl ConstituentProvider for HangSengConstituentProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_constituents(
        &self,
        index: &HangSengIndex,
    ) -> Result<Vec<Record>, MarketDataError> {
        let bytes = self
            .fetcher
            .get_bytes(PROVIDER_ID, index.source_url())
            .await?;
        let grid = spreadsheet::read_first_sheet(bytes, PROVIDER_ID)?;
        let table = Table::from_grid(grid, STOCK_CODE, PROVIDER_ID)?;
        let constituents = constituents_from_table(table);
        debug!(
            provider = PROVIDER_ID,
            index = index.symbol(),
            count = constituents.len(),
            "loaded constituents"
        );
        Ok(constituents)
    }
}

pub(crate) fn constituents_from_table(table: Table) -> Vec<Record> {
    let code_header = table
        .column(STOCK_CODE)
        .map(|i| table.headers()[i].clone());

    table
        .into_records()
        .into_iter()
        .map(|mut record| {
            if let Some(code) = code_header.as_ref().and_then(|h| record.get_mut(h)) {
                convert_stock_code(code);
            }
            record
        })
        .collect()
}

/// Replace a stock code cell with the canonical ticker; other cells are kept.
fn convert_stock_code(cell: &mut Value) {
    if let Some(ticker) = Ticker::parse_lenient(&value_text(cell)) {
        *cell = Value::String(ticker.to_string());
    }
}
