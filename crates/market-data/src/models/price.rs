use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One observation of a daily close-price series.
///
/// Dates are calendar dates in the exchange's local convention, exactly as
/// the provider reports them. No timezone normalization is attempted:
/// downstream alignment joins on calendar identity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}
