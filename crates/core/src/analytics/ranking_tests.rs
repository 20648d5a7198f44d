#[cfg(test)]
mod tests {
    use carteira_market_data::Fundamentals;

    use crate::analytics::{rank_by_dividend_yield, top_yield_candidate};
    use crate::portfolio::{Holding, Portfolio};

    fn holding(ticker: &str, weight: f64, dy: Option<f64>) -> Holding {
        Holding::new(ticker, weight, weight).with_fundamentals(Fundamentals {
            dividend_yield: dy,
            ..Default::default()
        })
    }

    fn sample() -> Portfolio {
        Portfolio::from_holdings(vec![
            holding("A", 0.25, Some(0.08)),
            holding("B", 0.25, Some(0.12)),
            holding("C", 0.25, None),
            holding("D", 0.25, Some(0.05)),
        ])
        .unwrap()
    }

    #[test]
    fn ranks_descending_and_excludes_unknown() {
        let ranked = rank_by_dividend_yield(&sample());
        let tickers: Vec<&str> = ranked.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["B", "A", "D"]);
    }

    #[test]
    fn top_candidate_is_the_highest_yield() {
        let top = top_yield_candidate(&sample()).unwrap();
        assert_eq!(top.ticker, "B");
        assert_eq!(top.dividend_yield, 0.12);
    }

    #[test]
    fn all_unknown_yields_no_candidate() {
        let portfolio = Portfolio::from_holdings(vec![
            holding("A", 0.5, None),
            holding("B", 0.5, None),
        ])
        .unwrap();

        assert!(rank_by_dividend_yield(&portfolio).is_empty());
        assert_eq!(top_yield_candidate(&portfolio), None);
    }

    #[test]
    fn yield_ties_break_by_ticker() {
        let portfolio = Portfolio::from_holdings(vec![
            holding("Z", 0.5, Some(0.07)),
            holding("A", 0.5, Some(0.07)),
        ])
        .unwrap();

        let ranked = rank_by_dividend_yield(&portfolio);
        assert_eq!(ranked[0].ticker, "A");
        assert_eq!(ranked[1].ticker, "Z");
    }
}
