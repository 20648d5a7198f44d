//! Plain-text report rendering.
//!
//! Prints the analysis the way the summary is structured: composition
//! first, then the derived views, with unavailable components named
//! rather than skipped. Formatting only; every number comes straight
//! from the summary.

use std::fmt::Write as _;

use carteira_core::analytics::{AnalysisSummary, ComponentOutcome};

const RISK_DISCLAIMER: &str =
    "Note: picking the highest past yield is illustrative only; yields are not \
guaranteed and concentration increases risk. This is not an investment \
recommendation.";

pub fn render(summary: &AnalysisSummary) -> String {
    let mut out = String::new();

    section(&mut out, "Portfolio composition");
    let _ = writeln!(
        out,
        "{:<12} {:>8} {:>10} {:>8} {:>8} {:>8}  {}",
        "Ticker", "Weight", "Price", "DY", "P/E", "P/B", "Sector"
    );
    for h in &summary.holdings {
        let f = &h.fundamentals;
        let _ = writeln!(
            out,
            "{:<12} {:>7.2}% {:>10} {:>8} {:>8} {:>8}  {}",
            h.ticker,
            h.normalized_weight * 100.0,
            opt_num(f.price, 2),
            opt_pct(f.dividend_yield),
            opt_num(f.price_earnings, 2),
            opt_num(f.price_to_book, 2),
            f.sector.as_deref().unwrap_or("-"),
        );
    }
    for skip in &summary.skipped {
        let _ = writeln!(out, "  (no market data for {}: {})", skip.ticker, skip.reason);
    }

    section(&mut out, "Weighted metrics");
    let m = &summary.metrics;
    let _ = writeln!(out, "Dividend yield:   {}", opt_pct(m.dividend_yield));
    let _ = writeln!(out, "P/E:              {}", opt_num(m.price_earnings, 2));
    let _ = writeln!(out, "P/B:              {}", opt_num(m.price_to_book, 2));
    let _ = writeln!(out, "ROE:              {}", opt_pct(m.return_on_equity));
    let _ = writeln!(out, "Market cap (sum): {}", opt_num(m.total_market_cap, 0));

    section(&mut out, "Sector allocation");
    for bucket in &summary.sectors {
        let _ = writeln!(
            out,
            "{:<24} {:>7.2}%  ({})",
            bucket.sector,
            bucket.aggregate_weight * 100.0,
            bucket.tickers.join(", ")
        );
    }

    section(&mut out, "Dividend yield ranking");
    for (position, ranked) in summary.yield_ranking.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {:<12} {:>7.2}%",
            position + 1,
            ranked.ticker,
            ranked.dividend_yield * 100.0
        );
    }
    match &summary.top_yield {
        Some(top) => {
            let _ = writeln!(
                out,
                "Top pick by yield: {} ({:.2}%)",
                top.ticker,
                top.dividend_yield * 100.0
            );
            let _ = writeln!(out, "{}", RISK_DISCLAIMER);
        }
        None => {
            let _ = writeln!(out, "No holding has a known dividend yield.");
        }
    }

    section(&mut out, "Equal-weight rebalance scenario");
    for r in &summary.rebalance {
        let _ = writeln!(
            out,
            "{:<12} {:>7.2}% -> {:>6.2}%",
            r.ticker,
            r.current_weight * 100.0,
            r.equal_weight * 100.0
        );
    }

    section(&mut out, "Weighted dividend flow");
    match &summary.dividend_flow {
        ComponentOutcome::Computed(flow) if flow.is_empty() => {
            let _ = writeln!(out, "No dividend payments in the period.");
        }
        ComponentOutcome::Computed(flow) => {
            for payment in flow {
                let _ = writeln!(out, "{}  {:.4}", payment.date, payment.amount);
            }
        }
        ComponentOutcome::Unavailable { reason } => {
            let _ = writeln!(out, "Unavailable: {}", reason);
        }
    }

    section(&mut out, "Benchmark comparison");
    match &summary.benchmark {
        ComponentOutcome::Computed(comparison) => {
            let _ = writeln!(
                out,
                "Common dates: {} ({} to {})",
                comparison.portfolio.len(),
                comparison.portfolio[0].date,
                comparison.portfolio[comparison.portfolio.len() - 1].date
            );
            let _ = writeln!(
                out,
                "Portfolio total return: {:>7.2}%",
                comparison.portfolio_total_return * 100.0
            );
            let _ = writeln!(
                out,
                "Benchmark total return: {:>7.2}%",
                comparison.benchmark_total_return * 100.0
            );
        }
        ComponentOutcome::Unavailable { reason } => {
            let _ = writeln!(out, "Unavailable: {}", reason);
        }
    }

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n== {} ==", title);
}

fn opt_num(value: Option<f64>, decimals: usize) -> String {
    value.map_or("-".to_string(), |v| format!("{:.*}", decimals, v))
}

fn opt_pct(value: Option<f64>) -> String {
    value.map_or("-".to_string(), |v| format!("{:.2}%", v * 100.0))
}
