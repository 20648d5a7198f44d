//! Error types for the market data crate.

use thiserror::Error;
use yahoo_finance_api::YahooError;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    /// This is a terminal error - retrying won't help.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The symbol exists but has no quotes in the requested period.
    #[error("No data for date range")]
    NoDataForRange,

    /// A provider-specific error occurred.
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Network-level failure talking to the provider.
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The provider returned a payload we could not interpret.
    #[error("Parsing error: {0}")]
    ParsingError(String),

    /// The fetch exceeded the caller's deadline.
    #[error("Timeout fetching {0}")]
    Timeout(String),

    /// Anything else.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<YahooError> for MarketDataError {
    fn from(error: YahooError) -> Self {
        match error {
            YahooError::FetchFailed(e) => MarketDataError::ProviderError(e),
            YahooError::NoQuotes => MarketDataError::SymbolNotFound("No quotes found".to_string()),
            YahooError::NoResult => MarketDataError::SymbolNotFound("No data found".to_string()),
            _ => MarketDataError::Unknown(error.to_string()),
        }
    }
}

impl From<serde_json::Error> for MarketDataError {
    fn from(error: serde_json::Error) -> Self {
        MarketDataError::ParsingError(error.to_string())
    }
}
