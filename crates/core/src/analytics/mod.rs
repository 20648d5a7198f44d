pub(crate) mod analytics_errors;
pub(crate) mod benchmark;
pub(crate) mod dividend_flow;
pub(crate) mod metrics;
pub(crate) mod ranking;
pub(crate) mod rebalance;
pub(crate) mod sector;
pub(crate) mod summary;

mod dividend_flow_tests;
mod metrics_tests;
mod ranking_tests;
mod rebalance_tests;
mod sector_tests;
mod summary_tests;

pub use analytics_errors::InsufficientDataError;
pub use benchmark::{compare_to_benchmark, weighted_price_series, BenchmarkComparison, ReturnPoint};
pub use dividend_flow::{weighted_dividend_flow, WeightedDividend};
pub use metrics::{aggregate_metrics, PortfolioMetrics};
pub use ranking::{rank_by_dividend_yield, top_yield_candidate, RankedYield};
pub use rebalance::{equal_weight_rebalance, RebalancedWeight};
pub use sector::{sector_allocations, SectorBucket};
pub use summary::{build_summary, AnalysisSummary, ComponentOutcome};
