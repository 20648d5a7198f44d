pub(crate) mod traits;
pub mod yahoo;

pub use traits::MarketDataProvider;
