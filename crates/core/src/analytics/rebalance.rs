//! Equal-weight rebalancing scenario.

use serde::{Deserialize, Serialize};

use crate::portfolio::{InvalidPortfolioError, Portfolio};

/// A holding's weight under the equal-weight scenario, next to its
/// current weight. A derived view: the portfolio itself is not touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalancedWeight {
    pub ticker: String,
    pub current_weight: f64,
    pub equal_weight: f64,
}

/// Assign every holding the same share, 1/N.
///
/// Fails on an empty portfolio; with N > 0 the derived weights always sum
/// to 1.0.
pub fn equal_weight_rebalance(
    portfolio: &Portfolio,
) -> Result<Vec<RebalancedWeight>, InvalidPortfolioError> {
    if portfolio.is_empty() {
        return Err(InvalidPortfolioError::Empty);
    }

    let equal_weight = 1.0 / portfolio.len() as f64;
    Ok(portfolio
        .holdings()
        .iter()
        .map(|h| RebalancedWeight {
            ticker: h.ticker.clone(),
            current_weight: h.normalized_weight,
            equal_weight,
        })
        .collect())
}
