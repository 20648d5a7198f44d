//! Carteira CLI binary.
//!
//! Reads a portfolio CSV, runs the analysis pipeline against live Yahoo
//! Finance data, and prints the report. Optionally exports the enriched
//! table and generates an LLM commentary.

mod report;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use log::warn;

use carteira_ai::{LlmNarrativeGenerator, NarrativeConfig, NarrativeGenerator};
use carteira_core::constants::{DEFAULT_BENCHMARK_SYMBOL, DEFAULT_HISTORY_DAYS};
use carteira_core::export::export_holdings_file;
use carteira_core::ingest::parse_holdings_file;
use carteira_core::portfolio::PortfolioAnalysisService;
use carteira_market_data::YahooProvider;

#[derive(Parser)]
#[command(name = "carteira")]
#[command(about = "Dividend portfolio analyzer", long_about = None)]
#[command(version)]
struct Cli {
    /// Portfolio CSV with Ticker and Peso columns
    input: PathBuf,

    /// Benchmark symbol to compare against
    #[arg(long, default_value = DEFAULT_BENCHMARK_SYMBOL)]
    benchmark: String,

    /// History lookback in days
    #[arg(long, default_value_t = DEFAULT_HISTORY_DAYS)]
    days: i64,

    /// Write the enriched composition table to this CSV path
    #[arg(long)]
    export: Option<PathBuf>,

    /// Print the full summary as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Generate an LLM commentary after the report
    #[arg(long)]
    narrative: bool,

    /// LLM provider: openai, anthropic, gemini, or ollama
    #[arg(long, default_value = "openai")]
    ai_provider: String,

    /// LLM model id
    #[arg(long, default_value = "gpt-4o-mini")]
    ai_model: String,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (rows, row_errors) = parse_holdings_file(&cli.input)?;
    for error in &row_errors {
        match error.line {
            Some(line) => warn!("Skipping line {}: {}", line, error.message),
            None => warn!("Skipping row: {}", error.message),
        }
    }

    let provider = Arc::new(YahooProvider::new()?);
    let service = PortfolioAnalysisService::new(provider)
        .with_benchmark(cli.benchmark.as_str())
        .with_history_days(cli.days);
    let summary = service.analyze(&rows).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", report::render(&summary));
    }

    if let Some(path) = &cli.export {
        export_holdings_file(&summary.holdings, path)?;
        eprintln!("Enriched table written to {}", path.display());
    }

    if cli.narrative {
        let config = NarrativeConfig::from_env(&cli.ai_provider, &cli.ai_model);
        let generator = LlmNarrativeGenerator::new(config);
        match generator.generate_narrative(&summary).await {
            Ok(text) => println!("\n== Commentary ==\n{}", text),
            Err(e) => {
                warn!("Narrative generation failed: {}", e);
                println!("\n== Commentary ==\nAnalysis unavailable: {}", e);
            }
        }
    }

    Ok(())
}
