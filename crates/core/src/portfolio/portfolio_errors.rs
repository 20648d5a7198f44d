use thiserror::Error;

/// Structural errors on the portfolio as a whole.
///
/// These abort the analytics pipeline: a portfolio that cannot be
/// normalized has nothing meaningful to analyze.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidPortfolioError {
    #[error("Portfolio has no holdings")]
    Empty,

    /// Weights sum to zero or less. Individual negative weights are
    /// tolerated (short-like entries surface in the output instead of
    /// being clamped away), but a non-positive total is unnormalizable.
    #[error("Portfolio weights sum to {0}, expected a positive total")]
    NonPositiveWeightSum(f64),

    /// Duplicate rows must be merged by the caller before normalization;
    /// silently summing them here would hide bad input.
    #[error("Duplicate ticker: {0}")]
    DuplicateTicker(String),
}
