mod dividend;
mod fundamentals;
mod price;

pub use dividend::{annualized_dividend_growth, trailing_twelve_month_yield, DividendEvent};
pub use fundamentals::Fundamentals;
pub use price::PricePoint;
