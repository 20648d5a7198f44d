//! Enriched-table CSV export.
//!
//! The export is flat: one row per holding with the fundamentals pulled
//! up beside the weights, unknown fields left empty. Reading the file
//! back reconstructs the holdings, so the table doubles as a snapshot
//! format. Weights survive the round trip exactly.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use carteira_market_data::Fundamentals;

use crate::errors::Result;
use crate::portfolio::Holding;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportRow {
    ticker: String,
    raw_weight: f64,
    normalized_weight: f64,
    name: Option<String>,
    sector: Option<String>,
    price: Option<f64>,
    dividend_yield: Option<f64>,
    price_earnings: Option<f64>,
    price_to_book: Option<f64>,
    return_on_equity: Option<f64>,
    market_cap: Option<f64>,
    dy_growth_3y: Option<f64>,
    dy_growth_5y: Option<f64>,
}

impl From<&Holding> for ExportRow {
    fn from(holding: &Holding) -> Self {
        let f = &holding.fundamentals;
        ExportRow {
            ticker: holding.ticker.clone(),
            raw_weight: holding.raw_weight,
            normalized_weight: holding.normalized_weight,
            name: f.name.clone(),
            sector: f.sector.clone(),
            price: f.price,
            dividend_yield: f.dividend_yield,
            price_earnings: f.price_earnings,
            price_to_book: f.price_to_book,
            return_on_equity: f.return_on_equity,
            market_cap: f.market_cap,
            dy_growth_3y: f.dy_growth_3y,
            dy_growth_5y: f.dy_growth_5y,
        }
    }
}

impl From<ExportRow> for Holding {
    fn from(row: ExportRow) -> Self {
        Holding::new(row.ticker, row.raw_weight, row.normalized_weight).with_fundamentals(
            Fundamentals {
                name: row.name,
                sector: row.sector,
                price: row.price,
                dividend_yield: row.dividend_yield,
                price_earnings: row.price_earnings,
                price_to_book: row.price_to_book,
                return_on_equity: row.return_on_equity,
                market_cap: row.market_cap,
                dy_growth_3y: row.dy_growth_3y,
                dy_growth_5y: row.dy_growth_5y,
                ..Default::default()
            },
        )
    }
}

/// Write the enriched composition table as CSV.
pub fn write_holdings_csv<W: Write>(holdings: &[Holding], output: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    for holding in holdings {
        writer.serialize(ExportRow::from(holding))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a previously exported composition table.
pub fn read_holdings_csv<R: Read>(input: R) -> Result<Vec<Holding>> {
    let mut reader = csv::Reader::from_reader(input);
    let mut holdings = Vec::new();
    for record in reader.deserialize::<ExportRow>() {
        holdings.push(record?.into());
    }
    Ok(holdings)
}

/// Write the table to a file path.
pub fn export_holdings_file(holdings: &[Holding], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    write_holdings_csv(holdings, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_holdings() -> Vec<Holding> {
        vec![
            Holding::new("BBAS3.SA", 2.0, 2.0 / 3.0).with_fundamentals(Fundamentals {
                sector: Some("Bancos".to_string()),
                dividend_yield: Some(0.091),
                price_earnings: Some(4.52),
                ..Default::default()
            }),
            Holding::new("VALE3.SA", 1.0, 1.0 / 3.0),
        ]
    }

    #[test]
    fn round_trip_preserves_tickers_and_weights_exactly() {
        let holdings = sample_holdings();

        let mut buffer = Vec::new();
        write_holdings_csv(&holdings, &mut buffer).unwrap();
        let restored = read_holdings_csv(buffer.as_slice()).unwrap();

        assert_eq!(restored.len(), holdings.len());
        for (original, restored) in holdings.iter().zip(&restored) {
            assert_eq!(restored.ticker, original.ticker);
            // Bit-exact, not approximately equal.
            assert_eq!(restored.normalized_weight, original.normalized_weight);
            assert_eq!(restored.raw_weight, original.raw_weight);
        }
    }

    #[test]
    fn unknown_fields_round_trip_as_unknown() {
        let holdings = sample_holdings();

        let mut buffer = Vec::new();
        write_holdings_csv(&holdings, &mut buffer).unwrap();
        let restored = read_holdings_csv(buffer.as_slice()).unwrap();

        assert_eq!(restored[0].fundamentals.sector.as_deref(), Some("Bancos"));
        assert!(restored[1].fundamentals.is_empty());
        assert_eq!(restored[1].fundamentals.price, None);
    }

    #[test]
    fn header_uses_the_holding_field_names() {
        let mut buffer = Vec::new();
        write_holdings_csv(&sample_holdings(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let header = text.lines().next().unwrap();
        assert!(header.starts_with("ticker,rawWeight,normalizedWeight"));
        assert!(header.contains("dividendYield"));
        assert!(header.contains("dyGrowth3y"));
    }

    #[test]
    fn export_to_a_file_path_is_readable_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carteira.csv");

        export_holdings_file(&sample_holdings(), &path).unwrap();
        let restored = read_holdings_csv(File::open(&path).unwrap()).unwrap();
        assert_eq!(restored.len(), 2);
    }
}
