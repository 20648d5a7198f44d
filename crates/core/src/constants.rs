//! Shared defaults for the analysis pipeline.

use std::time::Duration;

/// Benchmark index compared against the portfolio by default (Ibovespa).
pub const DEFAULT_BENCHMARK_SYMBOL: &str = "^BVSP";

/// Historical lookback for price and dividend series, in days (~2 years).
pub const DEFAULT_HISTORY_DAYS: i64 = 730;

/// Caller-level deadline for a single provider fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Tolerance for weight-sum assertions.
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Bucket label for holdings whose sector the provider did not report.
/// Unknown sectors are grouped here, never dropped.
pub const UNKNOWN_SECTOR_LABEL: &str = "Unknown";
