use serde::{Deserialize, Serialize};

use carteira_market_data::Fundamentals;

use super::portfolio_errors::InvalidPortfolioError;

/// One row of user input, as parsed at the boundary.
///
/// `raw_weight` is whatever the user typed - fraction, percentage, or an
/// arbitrary positive scale. Normalization divides by the total, so the
/// scale never matters; only the sign of the total does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHoldingRow {
    pub ticker: String,
    pub raw_weight: f64,
}

impl RawHoldingRow {
    pub fn new(ticker: impl Into<String>, raw_weight: f64) -> Self {
        Self {
            ticker: ticker.into(),
            raw_weight,
        }
    }
}

/// One position within the portfolio.
///
/// Created by weight normalization, enriched exactly once with provider
/// fundamentals, and read-only afterwards. Derived views (equal-weight
/// scenario, yield rank) are produced as separate values, never written
/// back into the holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub ticker: String,
    pub raw_weight: f64,
    /// Fraction of the portfolio in [0, 1]; all holdings sum to 1.0.
    pub normalized_weight: f64,
    /// Provider fundamentals; every field optional. A missing field means
    /// "unknown", which downstream must never conflate with zero.
    #[serde(flatten)]
    pub fundamentals: Fundamentals,
}

impl Holding {
    pub fn new(ticker: impl Into<String>, raw_weight: f64, normalized_weight: f64) -> Self {
        Self {
            ticker: ticker.into(),
            raw_weight,
            normalized_weight,
            fundamentals: Fundamentals::default(),
        }
    }

    pub fn with_fundamentals(mut self, fundamentals: Fundamentals) -> Self {
        self.fundamentals = fundamentals;
        self
    }
}

/// The portfolio: a collection of holdings with unique tickers.
///
/// Owns its holdings exclusively. Nothing mutates a holding after
/// enrichment; analytics components only read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    /// Build a portfolio, rejecting duplicate tickers.
    pub fn from_holdings(holdings: Vec<Holding>) -> Result<Self, InvalidPortfolioError> {
        let mut seen = std::collections::HashSet::new();
        for holding in &holdings {
            if !seen.insert(holding.ticker.clone()) {
                return Err(InvalidPortfolioError::DuplicateTicker(
                    holding.ticker.clone(),
                ));
            }
        }
        Ok(Self { holdings })
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn weight_sum(&self) -> f64 {
        self.holdings.iter().map(|h| h.normalized_weight).sum()
    }

    /// Replace each holding's fundamentals, consuming the portfolio.
    /// Used once, by the enricher.
    pub(crate) fn into_enriched(
        self,
        mut fundamentals: impl FnMut(&str) -> Fundamentals,
    ) -> Self {
        let holdings = self
            .holdings
            .into_iter()
            .map(|h| {
                let f = fundamentals(&h.ticker);
                h.with_fundamentals(f)
            })
            .collect();
        Self { holdings }
    }
}
