use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One historical dividend payment for a ticker.
///
/// `amount` is the per-share amount in the listing currency, following the
/// provider's convention. The analytics engine only reweights these values
/// by portfolio share; it never reinterprets them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendEvent {
    pub date: NaiveDate,
    pub amount: f64,
}

impl DividendEvent {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self { date, amount }
    }
}

/// Dividend yield derived from the trailing twelve months of payments.
///
/// Sums every payment dated within 365 days before `as_of` (inclusive) and
/// divides by `price`. Returns `None` when the price is absent or
/// non-positive, or when no payment falls in the window - a derived zero
/// would be indistinguishable from "pays no dividend", which the window
/// cannot establish on its own.
pub fn trailing_twelve_month_yield(
    events: &[DividendEvent],
    price: Option<f64>,
    as_of: NaiveDate,
) -> Option<f64> {
    let price = price.filter(|p| *p > 0.0)?;
    let window_start = as_of - chrono::Duration::days(365);
    let mut paid = 0.0;
    let mut seen = false;
    for event in events {
        if event.date > window_start && event.date <= as_of {
            paid += event.amount;
            seen = true;
        }
    }
    seen.then_some(paid / price)
}

/// Annualized growth rate of yearly dividend totals over `years` years.
///
/// Compares the total paid in the most recent complete 365-day window with
/// the total paid in the window `years` years earlier, as a compound
/// annual rate. Returns `None` when either window is empty or the base
/// total is non-positive.
pub fn annualized_dividend_growth(
    events: &[DividendEvent],
    years: u32,
    as_of: NaiveDate,
) -> Option<f64> {
    if years == 0 {
        return None;
    }
    let recent = window_total(events, as_of)?;
    let base_as_of = as_of - chrono::Duration::days(365 * years as i64);
    let base = window_total(events, base_as_of)?;
    if base <= 0.0 {
        return None;
    }
    Some((recent / base).powf(1.0 / f64::from(years)) - 1.0)
}

fn window_total(events: &[DividendEvent], as_of: NaiveDate) -> Option<f64> {
    let window_start = as_of - chrono::Duration::days(365);
    let mut total = 0.0;
    let mut seen = false;
    for event in events {
        if event.date > window_start && event.date <= as_of {
            total += event.amount;
            seen = true;
        }
    }
    seen.then_some(total)
}
