//! Header-keyed tables read from upstream documents.
//!
//! Providers publish their data as spreadsheets or HTML tables with a few
//! title lines above the real header. The readers in [`spreadsheet`] and
//! [`html`] only produce a raw grid of cells; [`Table::from_grid`] then finds
//! the header row and turns the rows below it into [`Record`]s.

pub mod html;
pub mod spreadsheet;

use serde_json::Value;

use crate::errors::MarketDataError;
use crate::models::{value_text, Record};

/// A raw grid of cells, row-major.
pub type Grid = Vec<Vec<Value>>;

/// A header row plus the data rows beneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table from `grid`, using the first row that has a cell equal to
    /// `header` (case-insensitive, trimmed) as the header row.
    ///
    /// Rows above the header are discarded, blank rows below it are skipped.
    pub fn from_grid(grid: Grid, header: &str, provider: &str) -> Result<Self, MarketDataError> {
        let mut rows = grid.into_iter();
        let headers = rows
            .by_ref()
            .find(|row| row.iter().any(|cell| header_matches(&value_text(cell), header)))
            .ok_or_else(|| {
                MarketDataError::parse(provider, format!("no header row containing '{}'", header))
            })?
            .iter()
            .map(value_text)
            .collect();

        let rows = rows.filter(|row| !is_blank(row)).collect();
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Position of the column titled `name` (case-insensitive, trimmed).
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| header_matches(h, name))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `column` of `row`; missing trailing cells read as `null`.
    pub fn cell<'a>(row: &'a [Value], column: usize) -> &'a Value {
        row.get(column).unwrap_or(&Value::Null)
    }

    /// Key a single row by the header. Columns with a blank title are dropped.
    pub fn record(&self, row: &[Value]) -> Record {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, title)| !title.is_empty())
            .map(|(i, title)| (title.clone(), Self::cell(row, i).clone()))
            .collect()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.rows.iter().map(|row| self.record(row)).collect()
    }
}

fn header_matches(cell: &str, header: &str) -> bool {
    cell.trim().eq_ignore_ascii_case(header.trim())
}

fn is_blank(row: &[Value]) -> bool {
    row.iter().all(|cell| value_text(cell).is_empty())
}
