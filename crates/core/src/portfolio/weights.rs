//! Weight normalization.

use super::portfolio_errors::InvalidPortfolioError;
use super::portfolio_model::{Holding, Portfolio, RawHoldingRow};

/// Convert raw user-entered weights into a canonical distribution.
///
/// Each output weight is `raw / sum(raw)`, so fractional and
/// percentage-style inputs normalize identically. Negative individual
/// weights pass through untouched as long as the total stays positive -
/// surfacing bad input is preferred over silently clamping it.
///
/// Fails when the input is empty, contains duplicate tickers (the caller
/// must merge those first), or sums to zero or less.
pub fn normalize_weights(rows: &[RawHoldingRow]) -> Result<Portfolio, InvalidPortfolioError> {
    if rows.is_empty() {
        return Err(InvalidPortfolioError::Empty);
    }

    let total: f64 = rows.iter().map(|r| r.raw_weight).sum();
    if total <= 0.0 {
        return Err(InvalidPortfolioError::NonPositiveWeightSum(total));
    }

    let holdings = rows
        .iter()
        .map(|row| Holding::new(row.ticker.clone(), row.raw_weight, row.raw_weight / total))
        .collect();

    Portfolio::from_holdings(holdings)
}
