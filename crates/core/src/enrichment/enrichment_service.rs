//! Holding enrichment.
//!
//! Merges each normalized holding with provider fundamentals. Fetches fan
//! out concurrently, one per ticker, and failures stay per-holding: a
//! ticker the provider cannot serve keeps its weight with all fundamental
//! fields unknown, and the failure is collected as a skip record. One bad
//! ticker never fails the batch.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;

use carteira_market_data::{Fundamentals, MarketDataProvider};

use crate::constants::DEFAULT_FETCH_TIMEOUT;
use crate::portfolio::Portfolio;

/// A holding the provider could not enrich, with the reason.
///
/// Serialized into the analysis summary so downstream consumers can tell
/// "unknown" apart from "zero".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentSkip {
    pub ticker: String,
    pub reason: String,
}

/// Result of an enrichment pass: the portfolio with fundamentals filled
/// in where available, plus the per-ticker skip records.
#[derive(Debug)]
pub struct EnrichedPortfolio {
    pub portfolio: Portfolio,
    pub skipped: Vec<EnrichmentSkip>,
}

pub struct HoldingEnricher {
    provider: Arc<dyn MarketDataProvider>,
    fetch_timeout: Duration,
}

impl HoldingEnricher {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            provider,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Enrich every holding, consuming the portfolio.
    ///
    /// Holdings are enriched exactly once; the returned portfolio is
    /// read-only for the rest of the pipeline.
    pub async fn enrich(&self, portfolio: Portfolio) -> EnrichedPortfolio {
        let tickers: Vec<String> = portfolio
            .holdings()
            .iter()
            .map(|h| h.ticker.clone())
            .collect();

        let fetches = tickers.iter().map(|ticker| {
            let provider = Arc::clone(&self.provider);
            async move {
                let result = timeout(self.fetch_timeout, provider.get_fundamentals(ticker)).await;
                (ticker.clone(), result)
            }
        });

        let mut enriched: HashMap<String, Fundamentals> = HashMap::new();
        let mut skipped = Vec::new();

        for (ticker, result) in join_all(fetches).await {
            match result {
                Ok(Ok(fundamentals)) => {
                    debug!("Enriched {}", ticker);
                    enriched.insert(ticker, fundamentals);
                }
                Ok(Err(e)) => {
                    warn!("Could not enrich {}: {}", ticker, e);
                    skipped.push(EnrichmentSkip {
                        ticker,
                        reason: e.to_string(),
                    });
                }
                Err(_) => {
                    warn!(
                        "Enrichment of {} timed out after {:?}",
                        ticker, self.fetch_timeout
                    );
                    skipped.push(EnrichmentSkip {
                        ticker,
                        reason: format!("Timed out after {:?}", self.fetch_timeout),
                    });
                }
            }
        }

        // Skipped holdings keep ticker and weight; their fundamentals stay
        // unknown rather than defaulting to zero.
        let portfolio = portfolio
            .into_enriched(|ticker| enriched.remove(ticker).unwrap_or_default());

        EnrichedPortfolio { portfolio, skipped }
    }
}
