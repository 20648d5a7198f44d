#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use carteira_market_data::DividendEvent;

    use crate::analytics::weighted_dividend_flow;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn same_date_payments_merge_across_holdings() {
        // Two holdings at 0.5 each, both paying 1.00 on the same date:
        // one entry of 0.5 + 0.5 = 1.00.
        let streams = vec![
            (0.5, vec![DividendEvent::new(d(2025, 3, 10), 1.0)]),
            (0.5, vec![DividendEvent::new(d(2025, 3, 10), 1.0)]),
        ];

        let flow = weighted_dividend_flow(&streams);
        assert_eq!(flow.len(), 1);
        assert_eq!(flow[0].date, d(2025, 3, 10));
        assert!((flow[0].amount - 1.0).abs() < 1e-12);
    }

    #[test]
    fn schedule_is_sorted_by_date_ascending() {
        let streams = vec![(
            1.0,
            vec![
                DividendEvent::new(d(2025, 6, 1), 0.3),
                DividendEvent::new(d(2024, 12, 15), 0.2),
                DividendEvent::new(d(2025, 3, 1), 0.1),
            ],
        )];

        let flow = weighted_dividend_flow(&streams);
        let dates: Vec<NaiveDate> = flow.iter().map(|f| f.date).collect();
        assert_eq!(dates, vec![d(2024, 12, 15), d(2025, 3, 1), d(2025, 6, 1)]);
    }

    #[test]
    fn amounts_are_scaled_by_holding_weight() {
        let streams = vec![
            (0.2, vec![DividendEvent::new(d(2025, 1, 10), 2.0)]),
            (0.8, vec![DividendEvent::new(d(2025, 2, 10), 1.0)]),
        ];

        let flow = weighted_dividend_flow(&streams);
        assert!((flow[0].amount - 0.4).abs() < 1e-12);
        assert!((flow[1].amount - 0.8).abs() < 1e-12);
    }

    #[test]
    fn empty_histories_contribute_nothing() {
        let streams = vec![
            (0.5, vec![]),
            (0.5, vec![DividendEvent::new(d(2025, 1, 10), 1.0)]),
        ];

        let flow = weighted_dividend_flow(&streams);
        assert_eq!(flow.len(), 1);
        assert!((flow[0].amount - 0.5).abs() < 1e-12);
    }

    #[test]
    fn no_streams_yield_an_empty_schedule() {
        assert!(weighted_dividend_flow(&[]).is_empty());
    }
}
