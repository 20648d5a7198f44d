//! Portfolio CSV ingest.
//!
//! The input is the upload format of the original workflow: a `Ticker`
//! column and a `Peso` weight column. Weights may be fractions or
//! percentages; normalization is scale-invariant so no scale is assumed
//! here. Malformed rows are collected as row-level errors instead of
//! aborting the whole file, so one typo does not cost the user the rest
//! of their upload.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::errors::Result;
use crate::portfolio::RawHoldingRow;

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Ticker", alias = "ticker")]
    ticker: String,
    #[serde(rename = "Peso", alias = "peso", alias = "Weight", alias = "weight")]
    weight: f64,
}

/// One row the parser could not turn into a holding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line in the input file, when the reader could attribute one.
    pub line: Option<u64>,
    pub message: String,
}

/// Parse the upload CSV into raw holding rows.
///
/// Rows that fail to parse are reported alongside the good ones; only
/// file-level problems (unreadable input, missing required headers) fail
/// the whole call.
pub fn parse_holdings_csv<R: Read>(input: R) -> Result<(Vec<RawHoldingRow>, Vec<RowError>)> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);

    let mut rows = Vec::new();
    let mut errors = Vec::new();
    for record in reader.deserialize::<CsvRow>() {
        match record {
            Ok(row) if row.ticker.is_empty() => errors.push(RowError {
                line: None,
                message: "Empty ticker".to_string(),
            }),
            Ok(row) => rows.push(RawHoldingRow::new(row.ticker, row.weight)),
            Err(e) => errors.push(RowError {
                line: e.position().map(|p| p.line()),
                message: e.to_string(),
            }),
        }
    }
    Ok((rows, errors))
}

/// Convenience wrapper over [`parse_holdings_csv`] for a file path.
pub fn parse_holdings_file(path: impl AsRef<Path>) -> Result<(Vec<RawHoldingRow>, Vec<RowError>)> {
    let file = File::open(path)?;
    parse_holdings_csv(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ticker_and_peso_columns() {
        let input = "Ticker,Peso\nBBAS3.SA,0.6\nVALE3.SA,0.4\n";
        let (rows, errors) = parse_holdings_csv(input.as_bytes()).unwrap();

        assert!(errors.is_empty());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ticker, "BBAS3.SA");
        assert!((rows[0].raw_weight - 0.6).abs() < 1e-12);
    }

    #[test]
    fn percentage_scale_weights_pass_through_unscaled() {
        let input = "Ticker,Peso\nBBAS3.SA,60\nVALE3.SA,40\n";
        let (rows, errors) = parse_holdings_csv(input.as_bytes()).unwrap();

        assert!(errors.is_empty());
        assert!((rows[0].raw_weight - 60.0).abs() < 1e-12);
    }

    #[test]
    fn a_bad_row_is_collected_without_dropping_the_rest() {
        let input = "Ticker,Peso\nBBAS3.SA,0.6\nVALE3.SA,abc\nPETR4.SA,0.2\n";
        let (rows, errors) = parse_holdings_csv(input.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].ticker, "PETR4.SA");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, Some(3));
    }

    #[test]
    fn empty_tickers_are_rejected_per_row() {
        let input = "Ticker,Peso\n,0.6\nVALE3.SA,0.4\n";
        let (rows, errors) = parse_holdings_csv(input.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Empty ticker"));
    }

    #[test]
    fn lowercase_headers_are_accepted() {
        let input = "ticker,weight\nBBAS3.SA,1.0\n";
        let (rows, errors) = parse_holdings_csv(input.as_bytes()).unwrap();

        assert!(errors.is_empty());
        assert_eq!(rows.len(), 1);
    }
}
