//! Analysis summary assembly.
//!
//! The summary is the analytic contract handed downstream: the narrative
//! service, the report renderer, and exports all consume it. Assembly is
//! pure - no computation happens here - and nothing is dropped: a
//! component that failed or produced no candidate is carried as an
//! explicit status so consumers never mistake "unavailable" for zero.

use serde::{Deserialize, Serialize};

use crate::enrichment::EnrichmentSkip;
use crate::portfolio::{Holding, Portfolio};

use super::benchmark::BenchmarkComparison;
use super::dividend_flow::WeightedDividend;
use super::metrics::PortfolioMetrics;
use super::ranking::RankedYield;
use super::rebalance::RebalancedWeight;
use super::sector::SectorBucket;

/// Outcome of one analysis component.
///
/// Components that depend on external time series can fail on their own
/// without taking the rest of the analysis down; the failure reason
/// travels with the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum ComponentOutcome<T> {
    Computed(T),
    Unavailable { reason: String },
}

impl<T> ComponentOutcome<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => ComponentOutcome::Computed(value),
            Err(e) => ComponentOutcome::Unavailable {
                reason: e.to_string(),
            },
        }
    }

    pub fn as_computed(&self) -> Option<&T> {
        match self {
            ComponentOutcome::Computed(value) => Some(value),
            ComponentOutcome::Unavailable { .. } => None,
        }
    }
}

/// The full structured analysis of one portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    /// The enriched composition table.
    pub holdings: Vec<Holding>,
    /// Holdings the provider could not enrich, with reasons.
    pub skipped: Vec<EnrichmentSkip>,
    pub metrics: PortfolioMetrics,
    pub sectors: Vec<SectorBucket>,
    pub yield_ranking: Vec<RankedYield>,
    /// The illustrative yield-maximization pick; `null` means no holding
    /// had a known yield, which consumers must surface as such.
    pub top_yield: Option<RankedYield>,
    pub rebalance: Vec<RebalancedWeight>,
    pub dividend_flow: ComponentOutcome<Vec<WeightedDividend>>,
    pub benchmark: ComponentOutcome<BenchmarkComparison>,
}

/// Assemble the summary from the component outputs. Pure glue.
#[allow(clippy::too_many_arguments)]
pub fn build_summary(
    portfolio: &Portfolio,
    skipped: Vec<EnrichmentSkip>,
    metrics: PortfolioMetrics,
    sectors: Vec<SectorBucket>,
    yield_ranking: Vec<RankedYield>,
    top_yield: Option<RankedYield>,
    rebalance: Vec<RebalancedWeight>,
    dividend_flow: ComponentOutcome<Vec<WeightedDividend>>,
    benchmark: ComponentOutcome<BenchmarkComparison>,
) -> AnalysisSummary {
    AnalysisSummary {
        holdings: portfolio.holdings().to_vec(),
        skipped,
        metrics,
        sectors,
        yield_ranking,
        top_yield,
        rebalance,
        dividend_flow,
        benchmark,
    }
}
