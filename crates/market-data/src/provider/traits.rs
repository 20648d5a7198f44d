//! Market data provider trait definition.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::MarketDataError;
use crate::models::{DividendEvent, Fundamentals, PricePoint};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source. The
/// analytics engine receives the provider as an injected capability, never
/// as an ambient singleton, so tests can substitute a deterministic fake.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and for
    /// tagging the `source` field of returned fundamentals.
    fn id(&self) -> &'static str;

    /// Fetch fundamental data for a ticker.
    ///
    /// Missing individual fields are reported as `None` inside the
    /// returned [`Fundamentals`]; a completely unknown symbol is a
    /// [`MarketDataError::SymbolNotFound`].
    async fn get_fundamentals(&self, symbol: &str) -> Result<Fundamentals, MarketDataError>;

    /// Fetch daily close prices for a ticker over a date range.
    ///
    /// Both ends are inclusive. Points are ordered by date ascending.
    async fn get_price_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>, MarketDataError>;

    /// Fetch historical dividend payments for a ticker.
    ///
    /// Returns an empty vector when the ticker exists but has never paid
    /// a dividend - that is not an error. Events are ordered by date
    /// ascending.
    async fn get_dividend_history(&self, symbol: &str)
        -> Result<Vec<DividendEvent>, MarketDataError>;
}
