use serde::{Deserialize, Serialize};

/// Fundamental data for one ticker, as reported by a market data provider.
///
/// Every field is optional: providers routinely miss individual fields and
/// a missing value must stay distinguishable from a reported zero. A
/// default-constructed value means "nothing known about this ticker".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fundamentals {
    /// Provider that supplied this data (e.g., "YAHOO")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Company/asset name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Business sector (e.g., "Bancos", "Technology")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,

    /// Current market price in the listing currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Dividend yield as a decimal (0.065 for 6.5%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<f64>,

    /// Price-to-earnings ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_earnings: Option<f64>,

    /// Price-to-book ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_to_book: Option<f64>,

    /// Return on equity as a decimal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_on_equity: Option<f64>,

    /// Market capitalization in the listing currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,

    /// Annualized dividend growth over the trailing 3 years, as a decimal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dy_growth_3y: Option<f64>,

    /// Annualized dividend growth over the trailing 5 years, as a decimal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dy_growth_5y: Option<f64>,
}

impl Fundamentals {
    /// Whether the provider reported anything at all for this ticker.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.sector.is_none()
            && self.price.is_none()
            && self.dividend_yield.is_none()
            && self.price_earnings.is_none()
            && self.price_to_book.is_none()
            && self.return_on_equity.is_none()
            && self.market_cap.is_none()
            && self.dy_growth_3y.is_none()
            && self.dy_growth_5y.is_none()
    }
}
