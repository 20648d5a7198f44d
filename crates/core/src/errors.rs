use thiserror::Error;

use crate::analytics::InsufficientDataError;
use crate::portfolio::InvalidPortfolioError;
use carteira_market_data::MarketDataError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analytics engine.
///
/// Structural portfolio errors abort the whole pipeline; everything else
/// is scoped to a single component and reported inside the analysis
/// summary instead of surfacing here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid portfolio: {0}")]
    InvalidPortfolio(#[from] InvalidPortfolioError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Benchmark comparison failed: {0}")]
    InsufficientData(#[from] InsufficientDataError),

    #[error("Input validation failed: {0}")]
    Validation(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Validation(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Validation(err.to_string())
    }
}
