#[cfg(test)]
mod tests {
    use crate::analytics::equal_weight_rebalance;
    use crate::constants::WEIGHT_TOLERANCE;
    use crate::portfolio::{Holding, InvalidPortfolioError, Portfolio};

    #[test]
    fn every_holding_gets_one_over_n() {
        let portfolio = Portfolio::from_holdings(vec![
            Holding::new("A", 0.5, 0.5),
            Holding::new("B", 0.3, 0.3),
            Holding::new("C", 0.2, 0.2),
        ])
        .unwrap();

        let rebalanced = equal_weight_rebalance(&portfolio).unwrap();
        assert_eq!(rebalanced.len(), 3);
        for entry in &rebalanced {
            assert!((entry.equal_weight - 1.0 / 3.0).abs() < WEIGHT_TOLERANCE);
        }

        let total: f64 = rebalanced.iter().map(|r| r.equal_weight).sum();
        assert!((total - 1.0).abs() < WEIGHT_TOLERANCE);
    }

    #[test]
    fn original_weights_are_reported_untouched() {
        let portfolio =
            Portfolio::from_holdings(vec![Holding::new("A", 0.7, 0.7), Holding::new("B", 0.3, 0.3)])
                .unwrap();

        let rebalanced = equal_weight_rebalance(&portfolio).unwrap();
        assert_eq!(rebalanced[0].current_weight, 0.7);
        assert_eq!(portfolio.holdings()[0].normalized_weight, 0.7);
    }

    #[test]
    fn empty_portfolio_is_rejected() {
        let portfolio = Portfolio::from_holdings(vec![]).unwrap();
        assert_eq!(
            equal_weight_rebalance(&portfolio).unwrap_err(),
            InvalidPortfolioError::Empty
        );
    }
}
