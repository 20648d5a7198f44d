//! Benchmark-relative performance.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use carteira_market_data::PricePoint;

use super::analytics_errors::InsufficientDataError;

/// One point of a rebased performance curve. `value` is the series level
/// relative to the first common date (1.0 at the start).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Portfolio and benchmark curves over their common dates, both rebased
/// to 1.0 at the first common date so the comparison is relative rather
/// than absolute-price-dependent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    pub portfolio: Vec<ReturnPoint>,
    pub benchmark: Vec<ReturnPoint>,
    /// Total period return of the portfolio, as a decimal.
    pub portfolio_total_return: f64,
    /// Total period return of the benchmark, as a decimal.
    pub benchmark_total_return: f64,
}

/// Compose the portfolio's weighted price series from per-ticker
/// histories.
///
/// Only dates covered by every contributing ticker are kept (a date where
/// one ticker has no close would misstate the mix), and each ticker's
/// series is rebased to 1.0 at the first such date before weighting.
/// Tickers with an empty history are left out entirely and contribute
/// nothing, mirroring how enrichment degrades per holding rather than
/// failing the batch.
pub fn weighted_price_series(series: &[(f64, Vec<PricePoint>)]) -> Vec<PricePoint> {
    let contributing: Vec<(f64, BTreeMap<NaiveDate, f64>)> = series
        .iter()
        .filter(|(_, points)| !points.is_empty())
        .map(|(weight, points)| {
            let by_date = points.iter().map(|p| (p.date, p.close)).collect();
            (*weight, by_date)
        })
        .collect();

    if contributing.is_empty() {
        return Vec::new();
    }

    // Intersection of the per-ticker date sets.
    let mut common: Vec<NaiveDate> = contributing[0].1.keys().copied().collect();
    for (_, by_date) in &contributing[1..] {
        common.retain(|date| by_date.contains_key(date));
    }

    let Some(&first) = common.first() else {
        return Vec::new();
    };

    common
        .iter()
        .map(|date| {
            let level = contributing
                .iter()
                .map(|(weight, by_date)| {
                    let base = by_date[&first];
                    if base > 0.0 {
                        weight * by_date[date] / base
                    } else {
                        0.0
                    }
                })
                .sum();
            PricePoint::new(*date, level)
        })
        .collect()
}

/// Align the portfolio series against the benchmark and compare
/// cumulative performance.
///
/// Inner join on date: only dates present in both series are compared.
/// Interpolating or forward-filling missing benchmark points would
/// fabricate data, so it is not attempted. Fails when fewer than 2 common
/// dates exist or when either series starts at a non-positive value.
pub fn compare_to_benchmark(
    portfolio: &[PricePoint],
    benchmark: &[PricePoint],
) -> Result<BenchmarkComparison, InsufficientDataError> {
    let benchmark_by_date: BTreeMap<NaiveDate, f64> =
        benchmark.iter().map(|p| (p.date, p.close)).collect();

    let mut joined: Vec<(NaiveDate, f64, f64)> = portfolio
        .iter()
        .filter_map(|p| {
            benchmark_by_date
                .get(&p.date)
                .map(|bench| (p.date, p.close, *bench))
        })
        .collect();
    joined.sort_by_key(|(date, _, _)| *date);

    if joined.len() < 2 {
        return Err(InsufficientDataError::NotEnoughCommonDates(joined.len()));
    }

    let (_, first_portfolio, first_benchmark) = joined[0];
    if first_portfolio <= 0.0 || first_benchmark <= 0.0 {
        return Err(InsufficientDataError::DegenerateSeries);
    }

    let portfolio_curve: Vec<ReturnPoint> = joined
        .iter()
        .map(|(date, value, _)| ReturnPoint {
            date: *date,
            value: value / first_portfolio,
        })
        .collect();
    let benchmark_curve: Vec<ReturnPoint> = joined
        .iter()
        .map(|(date, _, value)| ReturnPoint {
            date: *date,
            value: value / first_benchmark,
        })
        .collect();

    let portfolio_total_return = last_value(&portfolio_curve) - 1.0;
    let benchmark_total_return = last_value(&benchmark_curve) - 1.0;

    Ok(BenchmarkComparison {
        portfolio: portfolio_curve,
        benchmark: benchmark_curve,
        portfolio_total_return,
        benchmark_total_return,
    })
}

fn last_value(curve: &[ReturnPoint]) -> f64 {
    curve.last().map_or(1.0, |p| p.value)
}
