use thiserror::Error;

/// The benchmark comparison could not be computed from the available
/// series. Scoped to the benchmark component: the rest of the analysis
/// is still produced when this fires.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InsufficientDataError {
    /// Fewer than 2 dates exist in both the portfolio and the benchmark
    /// series. Interpolating the gap would fabricate data, so we refuse.
    #[error("Only {0} common dates between portfolio and benchmark, need at least 2")]
    NotEnoughCommonDates(usize),

    /// A series starts at a non-positive value and cannot be rebased.
    #[error("Series starts at a non-positive value and cannot be rebased")]
    DegenerateSeries,
}
