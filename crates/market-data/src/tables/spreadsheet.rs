//! Excel workbook reader.
//!
//! HKEX and Hang Seng Indexes publish their lists as `.xls`/`.xlsx` files.
//! The format is detected from the bytes, only the first worksheet is read.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use serde_json::Value;

use super::Grid;
use crate::errors::MarketDataError;
use crate::models::text_value;

/// Decode a workbook and return its first worksheet as a grid.
pub fn read_first_sheet(bytes: Vec<u8>, provider: &str) -> Result<Grid, MarketDataError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| MarketDataError::parse(provider, format!("unreadable workbook: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| MarketDataError::parse(provider, "workbook has no worksheets"))?
        .map_err(|e| MarketDataError::parse(provider, format!("unreadable worksheet: {}", e)))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_value).collect())
        .collect())
}

fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Data::Bool(b) => Value::Bool(*b),
        Data::String(s) => text_value(s),
        other => text_value(&other.to_string()),
    }
}
