//! AASTOCKS dividend history provider.
//!
//! Scrapes the dividend page of a stock, which lists past and announced
//! dividends in a table with (among others) `Announce Date`, `Event`,
//! `Particular`, `Ex-Date` and `Payable Date` columns.
//!
//! # Source
//!
//! `http://www.aastocks.com/en/stocks/analysis/dividend.aspx?symbol={00005}`

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{value_text, Record, Ticker};
use crate::provider::{DividendProvider, HttpFetcher};
use crate::tables::{html, Table};

pub const PROVIDER_ID: &str = "AASTOCKS";

pub const DEFAULT_DIVIDEND_URL: &str = "http://www.aastocks.com/en/stocks/analysis/dividend.aspx";

const EX_DATE: &str = "Ex-Date";

/// Caller-facing format of the `ex_date_after` filter.
const FILTER_DATE_FORMAT: &str = "%m/%d/%Y";

/// Formats the ex-date column has been seen in.
const EX_DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%Y-%m-%d", "%d/%m/%Y"];

/// Dividend history scraped from AASTOCKS.
pub struct AastocksDividendProvider {
    fetcher: HttpFetcher,
    base_url: String,
}

impl AastocksDividendProvider {
    pub fn new(fetcher: HttpFetcher, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    fn page_url(&self, ticker: &Ticker) -> String {
        format!("{}?symbol={}", self.base_url, ticker.hkex_code())
    }
}

#[async_trait]
impl DividendProvider for AastocksDividendProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_dividends(
        &self,
        ticker: &Ticker,
        ex_date_after: &str,
    ) -> Result<Vec<Record>, MarketDataError> {
        // Reject a bad filter before spending a round trip on it.
        let cutoff = parse_filter_date(ex_date_after)?;
        let page = self
            .fetcher
            .get_text(PROVIDER_ID, &self.page_url(ticker))
            .await?;
        let dividends = dividends_from_html(&page, cutoff)?;
        debug!(provider = PROVIDER_ID, %ticker, count = dividends.len(), "loaded dividends");
        Ok(dividends)
    }
}

/// Parse the `mm/dd/yyyy` filter; single-digit month and day are accepted.
pub(crate) fn parse_filter_date(value: &str) -> Result<NaiveDate, MarketDataError> {
    NaiveDate::parse_from_str(value.trim(), FILTER_DATE_FORMAT)
        .map_err(|_| MarketDataError::InvalidDate(value.to_string()))
}

pub(crate) fn dividends_from_html(
    page: &str,
    cutoff: NaiveDate,
) -> Result<Vec<Record>, MarketDataError> {
    let grid = html::read_table(page, EX_DATE, PROVIDER_ID)?;
    let table = Table::from_grid(grid, EX_DATE, PROVIDER_ID)?;
    let ex_date_column = table
        .column(EX_DATE)
        .ok_or_else(|| MarketDataError::parse(PROVIDER_ID, "no 'Ex-Date' column"))?;

    Ok(table
        .rows()
        .filter(|row| {
            // Announced dividends without a fixed ex-date are kept.
            parse_ex_date(&value_text(Table::cell(row, ex_date_column)))
                .map_or(true, |date| date >= cutoff)
        })
        .map(|row| table.record(row))
        .collect())
}

fn parse_ex_date(text: &str) -> Option<NaiveDate> {
    EX_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}
