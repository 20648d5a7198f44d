//! Narrative generation for analysis summaries.
//!
//! Turns a structured [`AnalysisSummary`] into a short investor-facing
//! commentary through an LLM provider. The prompt carries only figures
//! that were actually computed; components that degraded are named as
//! unavailable so the model cannot paper over missing data.

use std::env;
use std::fmt::Write as _;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use rig::{
    client::{CompletionClient, Nothing},
    completion::Prompt,
    providers::{anthropic, gemini, ollama, openai},
};

use carteira_core::analytics::{AnalysisSummary, ComponentOutcome};

use crate::error::AiError;

// ============================================================================
// Narrative Generator Trait
// ============================================================================

/// Trait for generating portfolio narratives.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Generate a plain-text commentary for the given analysis.
    ///
    /// Fails rather than fabricates: when the provider errors out the
    /// caller renders "analysis unavailable", never invented text.
    async fn generate_narrative(&self, summary: &AnalysisSummary) -> Result<String, AiError>;
}

// ============================================================================
// Configuration
// ============================================================================

/// Provider selection and credentials for narrative generation.
#[derive(Debug, Clone)]
pub struct NarrativeConfig {
    /// Provider id: `openai` (default), `anthropic`, `gemini`, or `ollama`.
    pub provider_id: String,
    pub model_id: String,
    pub api_key: Option<String>,
    /// Base URL override, only honored by `ollama`.
    pub base_url: Option<String>,
}

impl NarrativeConfig {
    /// Build a config from the conventional environment variables for the
    /// chosen provider (`OPENAI_API_KEY`, `ANTHROPIC_API_KEY`,
    /// `GEMINI_API_KEY`; `ollama` needs no key).
    pub fn from_env(provider_id: &str, model_id: &str) -> Self {
        let key_var = match provider_id {
            "anthropic" => "ANTHROPIC_API_KEY",
            "gemini" | "google" => "GEMINI_API_KEY",
            _ => "OPENAI_API_KEY",
        };
        Self {
            provider_id: provider_id.to_string(),
            model_id: model_id.to_string(),
            api_key: env::var(key_var).ok(),
            base_url: env::var("OLLAMA_BASE_URL").ok(),
        }
    }
}

// ============================================================================
// Implementation
// ============================================================================

pub struct LlmNarrativeGenerator {
    config: Arc<NarrativeConfig>,
}

impl LlmNarrativeGenerator {
    pub fn new(config: NarrativeConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    fn require_key(&self) -> Result<String, AiError> {
        self.config
            .api_key
            .clone()
            .ok_or_else(|| AiError::MissingApiKey(self.config.provider_id.clone()))
    }
}

#[async_trait]
impl NarrativeGenerator for LlmNarrativeGenerator {
    async fn generate_narrative(&self, summary: &AnalysisSummary) -> Result<String, AiError> {
        if summary.holdings.is_empty() {
            return Err(AiError::invalid_input("Summary has no holdings"));
        }

        let prompt = build_narrative_prompt(summary);
        debug!(
            "Generating narrative with provider {} model {}",
            self.config.provider_id, self.config.model_id
        );

        let model_id = &self.config.model_id;
        let response = match self.config.provider_id.as_str() {
            "anthropic" => {
                let key = self.require_key()?;
                let client: anthropic::Client<HttpClient> =
                    anthropic::Client::new(&key).map_err(|e| AiError::Provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .build()
                    .prompt(&prompt)
                    .await
                    .map_err(|e| AiError::Provider(e.to_string()))?
            }
            "gemini" | "google" => {
                let key = self.require_key()?;
                let client: gemini::Client<HttpClient> =
                    gemini::Client::new(&key).map_err(|e| AiError::Provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .build()
                    .prompt(&prompt)
                    .await
                    .map_err(|e| AiError::Provider(e.to_string()))?
            }
            "ollama" => {
                let mut builder = ollama::Client::<HttpClient>::builder().api_key(Nothing);
                if let Some(url) = &self.config.base_url {
                    builder = builder.base_url(url);
                }
                let client = builder
                    .build()
                    .map_err(|e| AiError::Provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .build()
                    .prompt(&prompt)
                    .await
                    .map_err(|e| AiError::Provider(e.to_string()))?
            }
            _ => {
                // Default to OpenAI-compatible.
                let key = self.require_key()?;
                let client: openai::Client<HttpClient> =
                    openai::Client::new(&key).map_err(|e| AiError::Provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .build()
                    .prompt(&prompt)
                    .await
                    .map_err(|e| AiError::Provider(e.to_string()))?
            }
        };

        let narrative = response.trim().to_string();
        if narrative.is_empty() {
            return Err(AiError::Internal("Provider returned an empty narrative".into()));
        }
        Ok(narrative)
    }
}

// ============================================================================
// Prompt construction
// ============================================================================

/// Render the analysis figures into the model prompt.
///
/// Pure so the exact prompt contents are testable without a provider.
pub fn build_narrative_prompt(summary: &AnalysisSummary) -> String {
    let mut facts = String::new();

    let _ = writeln!(facts, "Holdings ({}):", summary.holdings.len());
    for h in &summary.holdings {
        let yield_text = h
            .fundamentals
            .dividend_yield
            .map_or("yield unknown".to_string(), |dy| {
                format!("yield {:.2}%", dy * 100.0)
            });
        let sector = h.fundamentals.sector.as_deref().unwrap_or("sector unknown");
        let _ = writeln!(
            facts,
            "- {}: weight {:.2}%, {}, {}",
            h.ticker,
            h.normalized_weight * 100.0,
            sector,
            yield_text
        );
    }

    if !summary.skipped.is_empty() {
        let tickers: Vec<&str> = summary.skipped.iter().map(|s| s.ticker.as_str()).collect();
        let _ = writeln!(facts, "Holdings without market data: {}", tickers.join(", "));
    }

    if let Some(dy) = summary.metrics.dividend_yield {
        let _ = writeln!(facts, "Weighted dividend yield: {:.2}%", dy * 100.0);
    }
    if let Some(pe) = summary.metrics.price_earnings {
        let _ = writeln!(facts, "Weighted P/E: {:.2}", pe);
    }

    for bucket in &summary.sectors {
        let _ = writeln!(
            facts,
            "Sector {}: {:.2}%",
            bucket.sector,
            bucket.aggregate_weight * 100.0
        );
    }

    match &summary.top_yield {
        Some(top) => {
            let _ = writeln!(
                facts,
                "Highest known dividend yield: {} at {:.2}%",
                top.ticker,
                top.dividend_yield * 100.0
            );
        }
        None => {
            let _ = writeln!(facts, "No holding has a known dividend yield.");
        }
    }

    match &summary.benchmark {
        ComponentOutcome::Computed(comparison) => {
            let _ = writeln!(
                facts,
                "Period return: portfolio {:.2}%, benchmark {:.2}%",
                comparison.portfolio_total_return * 100.0,
                comparison.benchmark_total_return * 100.0
            );
        }
        ComponentOutcome::Unavailable { reason } => {
            let _ = writeln!(facts, "Benchmark comparison unavailable: {}", reason);
        }
    }
    if let ComponentOutcome::Unavailable { reason } = &summary.dividend_flow {
        let _ = writeln!(facts, "Dividend schedule unavailable: {}", reason);
    }

    format!(
        "You are writing a short commentary on a dividend-focused stock portfolio \
for its owner.\n\
Rules:\n\
- Use ONLY the figures below; never invent numbers or tickers\n\
- Where data is marked unavailable, say so plainly\n\
- 2 to 3 paragraphs of plain text, no markdown\n\
- Close with a sentence noting that concentrating on past yields carries risk \
and this is not an investment recommendation\n\n\
Figures:\n{facts}\n\
Commentary:"
    )
}
