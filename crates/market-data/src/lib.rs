//! Carteira Market Data Crate
//!
//! Provider-agnostic market data fetching for the Carteira portfolio
//! analyzer.
//!
//! # Overview
//!
//! The market data crate supplies everything the analytics engine needs
//! from the outside world:
//! - Per-ticker fundamentals (price, sector, dividend yield, valuation
//!   ratios, market cap, dividend growth)
//! - Historical daily close prices for portfolio and benchmark series
//! - Historical dividend payment events
//!
//! The analytics engine never talks to a concrete data source. It receives
//! an [`MarketDataProvider`] implementation, so tests can substitute a
//! deterministic fake and the production wiring can pick Yahoo Finance.
//!
//! # Core Types
//!
//! - [`Fundamentals`] - Provider-sourced profile data, every field optional
//! - [`PricePoint`] - One (date, close) observation of a price series
//! - [`DividendEvent`] - One historical dividend payment
//! - [`MarketDataProvider`] - The capability trait implemented by providers
//! - [`YahooProvider`] - Yahoo Finance implementation

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{DividendEvent, Fundamentals, PricePoint};
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;
