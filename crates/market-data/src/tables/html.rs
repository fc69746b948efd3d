//! HTML table reader.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

use super::Grid;
use crate::errors::MarketDataError;
use crate::models::text_value;

lazy_static! {
    static ref TABLE: Selector = Selector::parse("table").unwrap();
    static ref ROW: Selector = Selector::parse("tr").unwrap();
    static ref CELL: Selector = Selector::parse("th, td").unwrap();
}

/// Return the grid of the first `<table>` that has a cell titled `header`.
///
/// Layout tables wrapping other tables are ignored so the grid only holds the
/// data table's own rows.
pub fn read_table(html: &str, header: &str, provider: &str) -> Result<Grid, MarketDataError> {
    let document = Html::parse_document(html);

    document
        .select(&TABLE)
        .filter(|table| !has_nested_table(*table))
        .map(table_grid)
        .find(|grid| {
            grid.iter()
                .flatten()
                .any(|cell| cell.as_str().is_some_and(|s| s.eq_ignore_ascii_case(header)))
        })
        .ok_or_else(|| {
            MarketDataError::parse(provider, format!("no table with a '{}' column", header))
        })
}

fn has_nested_table(table: ElementRef<'_>) -> bool {
    table
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .any(|element| element.value().name() == "table")
}

fn table_grid(table: ElementRef<'_>) -> Grid {
    table
        .select(&ROW)
        .map(|row| {
            row.select(&CELL)
                .map(|cell| text_value(&cell_text(cell)))
                .collect()
        })
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
