//! Carteira Core
//!
//! Analytics engine for a dividend-focused equity portfolio. The crate
//! takes user-entered (ticker, weight) pairs, enriches them with provider
//! fundamentals, and derives the analysis set: portfolio-level weighted
//! metrics, sector composition, dividend-yield ranking, an equal-weight
//! rebalancing scenario, a weighted dividend cash-flow schedule, and a
//! benchmark-relative performance comparison.
//!
//! The entry point for callers is
//! [`portfolio::PortfolioAnalysisService::analyze`], which runs the whole
//! pipeline and produces an [`analytics::AnalysisSummary`] - the structured
//! payload handed to the narrative service and to exports.
//!
//! Market data is an injected capability
//! ([`carteira_market_data::MarketDataProvider`]); nothing in this crate
//! talks to the network directly, so every computation is testable with a
//! deterministic fake provider.

pub mod analytics;
pub mod constants;
pub mod enrichment;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod portfolio;

pub use errors::{Error, Result};
pub use portfolio::{Holding, Portfolio, RawHoldingRow};
