//! End-to-end analysis pipeline.
//!
//! Order of operations: normalize -> enrich (concurrent fundamentals
//! fetch) -> pure analytics -> dividend flow and benchmark comparison
//! (concurrent series fetch) -> summary assembly. Structural portfolio
//! errors abort; everything else degrades the affected component only and
//! the rest of the analysis is still returned.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use futures::future::join_all;
use log::{info, warn};
use tokio::time::timeout;

use carteira_market_data::MarketDataProvider;

use crate::analytics::{
    aggregate_metrics, build_summary, compare_to_benchmark, equal_weight_rebalance,
    rank_by_dividend_yield, sector_allocations, top_yield_candidate, weighted_dividend_flow,
    weighted_price_series, AnalysisSummary, BenchmarkComparison, ComponentOutcome,
    WeightedDividend,
};
use crate::constants::{DEFAULT_BENCHMARK_SYMBOL, DEFAULT_FETCH_TIMEOUT, DEFAULT_HISTORY_DAYS};
use crate::enrichment::{EnrichedPortfolio, HoldingEnricher};
use crate::errors::Result;

use super::portfolio_model::{Portfolio, RawHoldingRow};
use super::weights::normalize_weights;

pub struct PortfolioAnalysisService {
    provider: Arc<dyn MarketDataProvider>,
    benchmark_symbol: String,
    history_days: i64,
    fetch_timeout: Duration,
}

impl PortfolioAnalysisService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            provider,
            benchmark_symbol: DEFAULT_BENCHMARK_SYMBOL.to_string(),
            history_days: DEFAULT_HISTORY_DAYS,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn with_benchmark(mut self, symbol: impl Into<String>) -> Self {
        self.benchmark_symbol = symbol.into();
        self
    }

    pub fn with_history_days(mut self, days: i64) -> Self {
        self.history_days = days;
        self
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Run the full analysis for the given raw rows.
    pub async fn analyze(&self, rows: &[RawHoldingRow]) -> Result<AnalysisSummary> {
        let portfolio = normalize_weights(rows)?;
        info!(
            "Analyzing portfolio of {} holdings against {}",
            portfolio.len(),
            self.benchmark_symbol
        );

        let enricher =
            HoldingEnricher::new(Arc::clone(&self.provider)).with_timeout(self.fetch_timeout);
        let EnrichedPortfolio { portfolio, skipped } = enricher.enrich(portfolio).await;

        // Pure analytics over the now-immutable portfolio.
        let metrics = aggregate_metrics(&portfolio);
        let sectors = sector_allocations(&portfolio);
        let yield_ranking = rank_by_dividend_yield(&portfolio);
        let top_yield = top_yield_candidate(&portfolio);
        let rebalance = equal_weight_rebalance(&portfolio)?;

        let end = Utc::now().date_naive();
        let start = end - chrono::Duration::days(self.history_days);

        let (dividend_flow, benchmark) = tokio::join!(
            self.dividend_flow_outcome(&portfolio),
            self.benchmark_outcome(&portfolio, start, end)
        );

        Ok(build_summary(
            &portfolio,
            skipped,
            metrics,
            sectors,
            yield_ranking,
            top_yield,
            rebalance,
            dividend_flow,
            benchmark,
        ))
    }

    /// Weighted dividend schedule, degraded to unavailable only when no
    /// holding's history could be fetched at all.
    async fn dividend_flow_outcome(
        &self,
        portfolio: &Portfolio,
    ) -> ComponentOutcome<Vec<WeightedDividend>> {
        let fetches = portfolio.holdings().iter().map(|holding| async move {
            let result = timeout(
                self.fetch_timeout,
                self.provider.get_dividend_history(&holding.ticker),
            )
            .await;
            (holding.ticker.clone(), holding.normalized_weight, result)
        });

        let mut streams = Vec::new();
        let mut failures = 0usize;
        for (ticker, weight, result) in join_all(fetches).await {
            match result {
                Ok(Ok(events)) => streams.push((weight, events)),
                Ok(Err(e)) => {
                    warn!("No dividend history for {}: {}", ticker, e);
                    failures += 1;
                }
                Err(_) => {
                    warn!("Dividend history fetch for {} timed out", ticker);
                    failures += 1;
                }
            }
        }

        if streams.is_empty() && failures > 0 {
            ComponentOutcome::Unavailable {
                reason: format!("No dividend history could be fetched ({failures} holdings failed)"),
            }
        } else {
            ComponentOutcome::Computed(weighted_dividend_flow(&streams))
        }
    }

    /// Benchmark-relative performance. A holding with no usable price
    /// history is treated as missing from the mix; a missing benchmark
    /// series makes the whole component unavailable.
    async fn benchmark_outcome(
        &self,
        portfolio: &Portfolio,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ComponentOutcome<BenchmarkComparison> {
        let holdings_fetches = join_all(portfolio.holdings().iter().map(|holding| async move {
            let result = timeout(
                self.fetch_timeout,
                self.provider.get_price_history(&holding.ticker, start, end),
            )
            .await;
            (holding.ticker.clone(), holding.normalized_weight, result)
        }));
        let benchmark_fetch = timeout(
            self.fetch_timeout,
            self.provider
                .get_price_history(&self.benchmark_symbol, start, end),
        );

        let (ticker_results, benchmark_result) = tokio::join!(holdings_fetches, benchmark_fetch);

        let benchmark_series = match benchmark_result {
            Ok(Ok(series)) => series,
            Ok(Err(e)) => {
                return ComponentOutcome::Unavailable {
                    reason: format!("Benchmark {}: {}", self.benchmark_symbol, e),
                }
            }
            Err(_) => {
                return ComponentOutcome::Unavailable {
                    reason: format!(
                        "Benchmark {} fetch timed out after {:?}",
                        self.benchmark_symbol, self.fetch_timeout
                    ),
                }
            }
        };

        let mut streams = Vec::new();
        for (ticker, weight, result) in ticker_results {
            match result {
                Ok(Ok(series)) => streams.push((weight, series)),
                Ok(Err(e)) => warn!("No price history for {}: {}", ticker, e),
                Err(_) => warn!("Price history fetch for {} timed out", ticker),
            }
        }

        let portfolio_series = weighted_price_series(&streams);
        ComponentOutcome::from_result(compare_to_benchmark(&portfolio_series, &benchmark_series))
    }
}
