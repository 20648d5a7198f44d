//! Portfolio-level weighted aggregates.

use serde::{Deserialize, Serialize};

use crate::portfolio::{Holding, Portfolio};

/// Weighted aggregates over the enriched holdings.
///
/// Every field is independently optional: `None` means no holding
/// supplied that metric, which must stay distinguishable from a computed
/// zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_earnings: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_to_book: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_on_equity: Option<f64>,
    /// Plain sum over holdings that report it, not a weighted average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_market_cap: Option<f64>,
}

/// Compute the weighted aggregates for a portfolio.
///
/// Each metric's weighted average renormalizes by the weight of the
/// holdings that actually report that metric. A holding with an unknown
/// P/E neither contributes to the numerator nor inflates the denominator,
/// so partial data does not bias averages toward zero.
pub fn aggregate_metrics(portfolio: &Portfolio) -> PortfolioMetrics {
    let holdings = portfolio.holdings();

    PortfolioMetrics {
        dividend_yield: weighted_average(holdings, |h| h.fundamentals.dividend_yield),
        price_earnings: weighted_average(holdings, |h| h.fundamentals.price_earnings),
        price_to_book: weighted_average(holdings, |h| h.fundamentals.price_to_book),
        return_on_equity: weighted_average(holdings, |h| h.fundamentals.return_on_equity),
        total_market_cap: known_sum(holdings, |h| h.fundamentals.market_cap),
    }
}

fn weighted_average(holdings: &[Holding], metric: impl Fn(&Holding) -> Option<f64>) -> Option<f64> {
    let mut weighted = 0.0;
    let mut known_weight = 0.0;
    for holding in holdings {
        if let Some(value) = metric(holding) {
            weighted += holding.normalized_weight * value;
            known_weight += holding.normalized_weight;
        }
    }
    (known_weight != 0.0).then_some(weighted / known_weight)
}

fn known_sum(holdings: &[Holding], metric: impl Fn(&Holding) -> Option<f64>) -> Option<f64> {
    let mut total = 0.0;
    let mut seen = false;
    for holding in holdings {
        if let Some(value) = metric(holding) {
            total += value;
            seen = true;
        }
    }
    seen.then_some(total)
}
