pub(crate) mod enrichment_service;


pub use enrichment_service::{EnrichedPortfolio, EnrichmentSkip, HoldingEnricher};
