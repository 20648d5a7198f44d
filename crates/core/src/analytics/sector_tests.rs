#[cfg(test)]
mod tests {
    use carteira_market_data::Fundamentals;

    use crate::analytics::sector_allocations;
    use crate::constants::{UNKNOWN_SECTOR_LABEL, WEIGHT_TOLERANCE};
    use crate::portfolio::{Holding, Portfolio};

    fn holding(ticker: &str, weight: f64, sector: Option<&str>) -> Holding {
        Holding::new(ticker, weight, weight).with_fundamentals(Fundamentals {
            sector: sector.map(str::to_string),
            ..Default::default()
        })
    }

    #[test]
    fn groups_by_sector_and_sums_weights() {
        let portfolio = Portfolio::from_holdings(vec![
            holding("BBAS3.SA", 0.3, Some("Bancos")),
            holding("ITUB4.SA", 0.3, Some("Bancos")),
            holding("VALE3.SA", 0.4, Some("Mineração")),
        ])
        .unwrap();

        let buckets = sector_allocations(&portfolio);
        assert_eq!(buckets.len(), 2);

        let bancos = buckets.iter().find(|b| b.sector == "Bancos").unwrap();
        assert!((bancos.aggregate_weight - 0.6).abs() < WEIGHT_TOLERANCE);
        assert_eq!(bancos.tickers, vec!["BBAS3.SA", "ITUB4.SA"]);
    }

    #[test]
    fn bucket_weights_conserve_total_weight() {
        let portfolio = Portfolio::from_holdings(vec![
            holding("A", 0.5, Some("Energia")),
            holding("B", 0.3, None),
            holding("C", 0.2, Some("Varejo")),
        ])
        .unwrap();

        let buckets = sector_allocations(&portfolio);
        let total: f64 = buckets.iter().map(|b| b.aggregate_weight).sum();
        assert!((total - portfolio.weight_sum()).abs() < WEIGHT_TOLERANCE);
    }

    #[test]
    fn unknown_sector_gets_its_own_bucket() {
        let portfolio = Portfolio::from_holdings(vec![
            holding("A", 0.7, Some("Bancos")),
            holding("B", 0.3, None),
        ])
        .unwrap();

        let buckets = sector_allocations(&portfolio);
        let unknown = buckets
            .iter()
            .find(|b| b.sector == UNKNOWN_SECTOR_LABEL)
            .expect("unknown-sector bucket must exist");
        assert_eq!(unknown.tickers, vec!["B"]);
    }

    #[test]
    fn ordering_is_descending_weight_with_lexicographic_ties() {
        let portfolio = Portfolio::from_holdings(vec![
            holding("A", 0.2, Some("Varejo")),
            holding("B", 0.2, Some("Bancos")),
            holding("C", 0.6, Some("Energia")),
        ])
        .unwrap();

        let buckets = sector_allocations(&portfolio);
        let names: Vec<&str> = buckets.iter().map(|b| b.sector.as_str()).collect();
        assert_eq!(names, vec!["Energia", "Bancos", "Varejo"]);
    }
}
