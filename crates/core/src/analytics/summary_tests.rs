#[cfg(test)]
mod tests {
    use crate::analytics::{
        build_summary, AnalysisSummary, ComponentOutcome, PortfolioMetrics,
    };
    use crate::portfolio::{Holding, Portfolio};

    fn minimal_summary(
        benchmark: ComponentOutcome<crate::analytics::BenchmarkComparison>,
    ) -> AnalysisSummary {
        let portfolio =
            Portfolio::from_holdings(vec![Holding::new("A", 1.0, 1.0)]).unwrap();
        build_summary(
            &portfolio,
            vec![],
            PortfolioMetrics::default(),
            vec![],
            vec![],
            None,
            vec![],
            ComponentOutcome::Computed(vec![]),
            benchmark,
        )
    }

    #[test]
    fn unavailable_components_serialize_with_an_explicit_status() {
        let summary = minimal_summary(ComponentOutcome::Unavailable {
            reason: "Only 1 common dates between portfolio and benchmark, need at least 2"
                .to_string(),
        });

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["benchmark"]["status"], "unavailable");
        assert!(json["benchmark"]["value"]["reason"]
            .as_str()
            .unwrap()
            .contains("common dates"));

        // A computed-but-empty component is still distinguishable.
        assert_eq!(json["dividendFlow"]["status"], "computed");
        assert_eq!(json["dividendFlow"]["value"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn missing_metrics_are_absent_not_zero() {
        let summary = minimal_summary(ComponentOutcome::Unavailable {
            reason: "n/a".to_string(),
        });

        let json = serde_json::to_value(&summary).unwrap();
        // No holding supplied a yield, so the key is absent entirely.
        assert!(json["metrics"].get("dividendYield").is_none());
    }

    #[test]
    fn no_candidate_is_an_explicit_null() {
        let summary = minimal_summary(ComponentOutcome::Computed(
            crate::analytics::BenchmarkComparison {
                portfolio: vec![],
                benchmark: vec![],
                portfolio_total_return: 0.0,
                benchmark_total_return: 0.0,
            },
        ));

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["topYield"].is_null());
    }

    #[test]
    fn from_result_preserves_the_error_text() {
        let outcome: ComponentOutcome<()> =
            ComponentOutcome::from_result(Err("provider unreachable"));
        assert_eq!(
            outcome,
            ComponentOutcome::Unavailable {
                reason: "provider unreachable".to_string()
            }
        );
        assert!(outcome.as_computed().is_none());
    }
}
