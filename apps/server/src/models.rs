use hkstocks_market_data::{Record, Ticker};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConstituentResult {
    pub index: &'static str,
    pub name: &'static str,
    /// Rows of the index workbook; `Stock Code` holds the canonical ticker.
    pub constituents: Vec<Record>,
}

#[derive(Debug, Serialize)]
pub struct LotSizeResult {
    pub ticker: Ticker,
    pub lot_size: u32,
}

#[derive(Debug, Serialize)]
pub struct DivResult {
    pub ticker: Ticker,
    /// Rows of the dividend table, keyed by its column headers.
    pub dividends: Vec<Record>,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    #[serde(rename = "HKStocks API")]
    pub version: &'static str,
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiDocs {
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<EndpointDoc>,
}

#[derive(Debug, Serialize)]
pub struct EndpointDoc {
    pub method: &'static str,
    pub path: String,
    pub summary: &'static str,
    pub parameters: Vec<ParameterDoc>,
}

#[derive(Debug, Serialize)]
pub struct ParameterDoc {
    pub name: &'static str,
    #[serde(rename = "in")]
    pub location: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
}
