pub(crate) mod portfolio_errors;
pub(crate) mod portfolio_model;
pub(crate) mod portfolio_service;
pub(crate) mod weights;


pub use portfolio_errors::InvalidPortfolioError;
pub use portfolio_model::{Holding, Portfolio, RawHoldingRow};
pub use portfolio_service::PortfolioAnalysisService;
pub use weights::normalize_weights;
