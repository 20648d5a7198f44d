//! Sector composition.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_SECTOR_LABEL;
use crate::portfolio::Portfolio;

/// Aggregate weight of one sector, with its member tickers.
///
/// Ephemeral and recomputed on demand; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorBucket {
    pub sector: String,
    pub aggregate_weight: f64,
    pub tickers: Vec<String>,
}

/// Group holdings by sector and compute each sector's weight share.
///
/// Holdings with no reported sector land in a dedicated
/// [`UNKNOWN_SECTOR_LABEL`] bucket rather than being dropped. Buckets are
/// ordered descending by weight, ties broken by sector name, so the
/// output is deterministic.
pub fn sector_allocations(portfolio: &Portfolio) -> Vec<SectorBucket> {
    let mut by_sector: BTreeMap<String, (f64, Vec<String>)> = BTreeMap::new();

    for holding in portfolio.holdings() {
        let sector = holding
            .fundamentals
            .sector
            .clone()
            .unwrap_or_else(|| UNKNOWN_SECTOR_LABEL.to_string());
        let entry = by_sector.entry(sector).or_default();
        entry.0 += holding.normalized_weight;
        entry.1.push(holding.ticker.clone());
    }

    let mut buckets: Vec<SectorBucket> = by_sector
        .into_iter()
        .map(|(sector, (aggregate_weight, tickers))| SectorBucket {
            sector,
            aggregate_weight,
            tickers,
        })
        .collect();

    buckets.sort_by(|a, b| {
        b.aggregate_weight
            .partial_cmp(&a.aggregate_weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.sector.cmp(&b.sector))
    });

    buckets
}
