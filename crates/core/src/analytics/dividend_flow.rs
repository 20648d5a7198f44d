//! Portfolio-weighted dividend cash flow.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use carteira_market_data::DividendEvent;

/// One date's weighted dividend amount across the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedDividend {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Merge per-holding dividend streams into one weighted schedule.
///
/// Each event contributes `amount x holding weight`; events on the same
/// calendar date are summed across holdings, and the result is ordered by
/// date ascending. Holdings with no dividend history contribute nothing,
/// which is not an error. Dates are compared by calendar identity exactly
/// as the provider reported them - if providers disagree on granularity,
/// same-day payments from different sources may land in separate entries.
pub fn weighted_dividend_flow(streams: &[(f64, Vec<DividendEvent>)]) -> Vec<WeightedDividend> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for (weight, events) in streams {
        for event in events {
            *by_date.entry(event.date).or_insert(0.0) += event.amount * weight;
        }
    }

    by_date
        .into_iter()
        .map(|(date, amount)| WeightedDividend { date, amount })
        .collect()
}
