#[cfg(test)]
mod tests {
    use carteira_market_data::Fundamentals;

    use crate::analytics::aggregate_metrics;
    use crate::portfolio::{Holding, Portfolio};

    fn holding(ticker: &str, weight: f64, fundamentals: Fundamentals) -> Holding {
        Holding::new(ticker, weight, weight).with_fundamentals(fundamentals)
    }

    #[test]
    fn unknown_metric_is_excluded_from_that_denominator() {
        // Weights 0.6/0.4, P/E 10 and unknown: the average must be 10,
        // not 6 - the unknown holding's weight leaves the denominator.
        let portfolio = Portfolio::from_holdings(vec![
            holding(
                "A",
                0.6,
                Fundamentals {
                    price_earnings: Some(10.0),
                    ..Default::default()
                },
            ),
            holding("B", 0.4, Fundamentals::default()),
        ])
        .unwrap();

        let metrics = aggregate_metrics(&portfolio);
        assert!((metrics.price_earnings.unwrap() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn weighted_average_uses_normalized_weights() {
        let portfolio = Portfolio::from_holdings(vec![
            holding(
                "A",
                0.75,
                Fundamentals {
                    dividend_yield: Some(0.08),
                    ..Default::default()
                },
            ),
            holding(
                "B",
                0.25,
                Fundamentals {
                    dividend_yield: Some(0.04),
                    ..Default::default()
                },
            ),
        ])
        .unwrap();

        let metrics = aggregate_metrics(&portfolio);
        assert!((metrics.dividend_yield.unwrap() - 0.07).abs() < 1e-12);
    }

    #[test]
    fn all_unknown_yields_none_not_zero() {
        let portfolio = Portfolio::from_holdings(vec![
            holding("A", 0.5, Fundamentals::default()),
            holding("B", 0.5, Fundamentals::default()),
        ])
        .unwrap();

        let metrics = aggregate_metrics(&portfolio);
        assert_eq!(metrics.dividend_yield, None);
        assert_eq!(metrics.price_earnings, None);
        assert_eq!(metrics.total_market_cap, None);
    }

    #[test]
    fn reported_zero_is_a_value_not_unknown() {
        let portfolio = Portfolio::from_holdings(vec![holding(
            "A",
            1.0,
            Fundamentals {
                dividend_yield: Some(0.0),
                ..Default::default()
            },
        )])
        .unwrap();

        assert_eq!(aggregate_metrics(&portfolio).dividend_yield, Some(0.0));
    }

    #[test]
    fn market_cap_is_summed_not_averaged() {
        let portfolio = Portfolio::from_holdings(vec![
            holding(
                "A",
                0.9,
                Fundamentals {
                    market_cap: Some(100.0),
                    ..Default::default()
                },
            ),
            holding(
                "B",
                0.1,
                Fundamentals {
                    market_cap: Some(50.0),
                    ..Default::default()
                },
            ),
        ])
        .unwrap();

        assert_eq!(aggregate_metrics(&portfolio).total_market_cap, Some(150.0));
    }
}
