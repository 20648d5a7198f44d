//! Serde models for the raw Yahoo Finance JSON endpoints.
//!
//! Only the fields the provider actually reads are declared; everything
//! else in the payloads is ignored during deserialization.

use serde::Deserialize;
use std::collections::HashMap;

/// Yahoo wraps most numeric fields as `{ "raw": 1.23, "fmt": "1.23" }`.
#[derive(Debug, Default, Deserialize)]
pub struct RawValue {
    pub raw: Option<f64>,
}

// ---------------------------------------------------------------------------
// quoteSummary endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    pub quote_summary: QuoteSummaryBody,
}

#[derive(Debug, Deserialize)]
pub struct QuoteSummaryBody {
    #[serde(default)]
    pub result: Option<Vec<QuoteSummaryResult>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResult {
    pub price: Option<PriceModule>,
    pub summary_profile: Option<SummaryProfileModule>,
    pub summary_detail: Option<SummaryDetailModule>,
    pub default_key_statistics: Option<KeyStatisticsModule>,
    pub financial_data: Option<FinancialDataModule>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceModule {
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    pub regular_market_price: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryProfileModule {
    pub sector: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDetailModule {
    pub dividend_yield: Option<RawValue>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<RawValue>,
    pub market_cap: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStatisticsModule {
    pub price_to_book: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialDataModule {
    pub return_on_equity: Option<RawValue>,
}

// ---------------------------------------------------------------------------
// chart endpoint (dividend events)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartBody,
}

#[derive(Debug, Deserialize)]
pub struct ChartBody {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub events: Option<ChartEvents>,
}

#[derive(Debug, Deserialize)]
pub struct ChartEvents {
    #[serde(default)]
    pub dividends: Option<HashMap<String, ChartDividend>>,
}

#[derive(Debug, Deserialize)]
pub struct ChartDividend {
    pub amount: f64,
    pub date: i64,
}
