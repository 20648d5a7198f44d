//! Dividend-yield ranking.

use serde::{Deserialize, Serialize};

use crate::portfolio::Portfolio;

/// One holding's position in the yield ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedYield {
    pub ticker: String,
    pub dividend_yield: f64,
    pub normalized_weight: f64,
}

/// Order holdings by dividend yield, highest first.
///
/// Holdings with an unknown yield are excluded entirely - treating
/// unknown as zero would silently rank them last as if they paid nothing.
/// Yield ties break by ticker for a deterministic order.
pub fn rank_by_dividend_yield(portfolio: &Portfolio) -> Vec<RankedYield> {
    let mut ranked: Vec<RankedYield> = portfolio
        .holdings()
        .iter()
        .filter_map(|h| {
            h.fundamentals.dividend_yield.map(|dy| RankedYield {
                ticker: h.ticker.clone(),
                dividend_yield: dy,
                normalized_weight: h.normalized_weight,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.dividend_yield
            .partial_cmp(&a.dividend_yield)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.ticker.cmp(&b.ticker))
    });

    ranked
}

/// The illustrative "all-in on the best payer" candidate.
///
/// Returns `None` when no holding has a known yield; callers must render
/// that as an explicit no-candidate state (with the risk disclaimer
/// either way), never pick an arbitrary holding.
pub fn top_yield_candidate(portfolio: &Portfolio) -> Option<RankedYield> {
    rank_by_dividend_yield(portfolio).into_iter().next()
}
