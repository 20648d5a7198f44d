//! Carteira AI
//!
//! LLM-backed narrative generation over the analytics output. The only
//! entry point is [`NarrativeGenerator`]: hand it an `AnalysisSummary`,
//! get back a plain-text commentary, or an error the caller surfaces as
//! "analysis unavailable". Prompt construction is pure and kept separate
//! from the provider call so it can be tested offline.

pub mod error;
pub mod narrative;

pub use error::AiError;
pub use narrative::{
    build_narrative_prompt, LlmNarrativeGenerator, NarrativeConfig, NarrativeGenerator,
};
