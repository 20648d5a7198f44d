//! Yahoo Finance market data provider.
//!
//! Price history goes through the `yahoo_finance_api` crate. Fundamentals
//! come from the raw `quoteSummary` endpoint, which needs the crumb/cookie
//! authentication dance, and dividend events come from the raw `chart`
//! endpoint with `events=div`. When the quoteSummary payload omits the
//! dividend yield or the growth figures, they are derived from the
//! dividend history instead.

mod models;

use std::collections::BTreeMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use log::{debug, warn};
use reqwest::{header, Client};
use tokio::sync::RwLock;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{
    annualized_dividend_growth, trailing_twelve_month_yield, DividendEvent, Fundamentals,
    PricePoint,
};
use crate::provider::traits::MarketDataProvider;

use models::{ChartResponse, QuoteSummaryResponse, QuoteSummaryResult, RawValue};

const PROVIDER_ID: &str = "YAHOO";
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 6.1; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";
const DIVIDEND_RANGE: &str = "10y";

#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

pub struct YahooProvider {
    connector: yahoo::YahooConnector,
    http: Client,
    crumb: RwLock<Option<CrumbData>>,
}

impl YahooProvider {
    pub fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new()?;
        Ok(Self {
            connector,
            http: Client::new(),
            crumb: RwLock::new(None),
        })
    }

    /// Fetch the crumb cookie pair Yahoo requires for quoteSummary calls.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        if let Some(crumb) = self.crumb.read().await.as_ref() {
            return Ok(crumb.clone());
        }

        let response = self.http.get("https://fc.yahoo.com").send().await?;
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(value, _)| value))
            .ok_or_else(|| {
                MarketDataError::ParsingError("Missing Yahoo crumb cookie".to_string())
            })?
            .to_string();

        let crumb = self
            .http
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await?
            .text()
            .await?;

        let crumb_data = CrumbData { cookie, crumb };
        *self.crumb.write().await = Some(crumb_data.clone());
        Ok(crumb_data)
    }

    async fn fetch_quote_summary(
        &self,
        symbol: &str,
    ) -> Result<QuoteSummaryResponse, MarketDataError> {
        let crumb_data = self.ensure_crumb().await?;
        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules=price,summaryProfile,summaryDetail,defaultKeyStatistics,financialData&crumb={}",
            symbol, crumb_data.crumb
        );

        let body = self
            .http
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &crumb_data.cookie)
            .send()
            .await?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }

    fn fundamentals_from_summary(result: &QuoteSummaryResult) -> Fundamentals {
        let price_module = result.price.as_ref();
        let detail = result.summary_detail.as_ref();

        Fundamentals {
            source: Some(PROVIDER_ID.to_string()),
            name: price_module.and_then(|p| p.long_name.clone().or_else(|| p.short_name.clone())),
            sector: result
                .summary_profile
                .as_ref()
                .and_then(|p| p.sector.clone()),
            price: price_module.and_then(|p| raw(&p.regular_market_price)),
            dividend_yield: detail.and_then(|d| raw(&d.dividend_yield)),
            price_earnings: detail.and_then(|d| raw(&d.trailing_pe)),
            price_to_book: result
                .default_key_statistics
                .as_ref()
                .and_then(|s| raw(&s.price_to_book)),
            return_on_equity: result
                .financial_data
                .as_ref()
                .and_then(|f| raw(&f.return_on_equity)),
            market_cap: detail.and_then(|d| raw(&d.market_cap)),
            dy_growth_3y: None,
            dy_growth_5y: None,
        }
    }

    /// Backfill yield and growth figures from the dividend event stream.
    async fn backfill_from_dividends(&self, symbol: &str, fundamentals: &mut Fundamentals) {
        let events = match self.dividend_history(symbol).await {
            Ok(events) => events,
            Err(e) => {
                warn!("Skipping dividend-derived fields for {}: {}", symbol, e);
                return;
            }
        };
        if events.is_empty() {
            return;
        }

        let today = Utc::now().date_naive();
        if fundamentals.dividend_yield.is_none() {
            fundamentals.dividend_yield =
                trailing_twelve_month_yield(&events, fundamentals.price, today);
        }
        fundamentals.dy_growth_3y = annualized_dividend_growth(&events, 3, today);
        fundamentals.dy_growth_5y = annualized_dividend_growth(&events, 5, today);
    }

    async fn dividend_history(&self, symbol: &str) -> Result<Vec<DividendEvent>, MarketDataError> {
        let url = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{}?range={}&interval=1d&events=div",
            symbol, DIVIDEND_RANGE
        );

        let body = self
            .http
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?
            .text()
            .await?;

        let response: ChartResponse = serde_json::from_str(&body)?;
        let result = response
            .chart
            .result
            .and_then(|mut r| (!r.is_empty()).then(|| r.remove(0)))
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        let mut events: Vec<DividendEvent> = result
            .events
            .and_then(|e| e.dividends)
            .map(|dividends| {
                dividends
                    .into_values()
                    .filter_map(|d| {
                        Utc.timestamp_opt(d.date, 0)
                            .single()
                            .map(|ts| DividendEvent::new(ts.date_naive(), d.amount))
                    })
                    .collect()
            })
            .unwrap_or_default();

        events.sort_by_key(|e| e.date);
        Ok(events)
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_fundamentals(&self, symbol: &str) -> Result<Fundamentals, MarketDataError> {
        let summary = self.fetch_quote_summary(symbol).await?;
        let result = summary
            .quote_summary
            .result
            .as_ref()
            .and_then(|r| r.first())
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        let mut fundamentals = Self::fundamentals_from_summary(result);
        if fundamentals.is_empty() {
            debug!("Yahoo returned an empty fundamentals payload for {}", symbol);
        }
        if fundamentals.dividend_yield.is_none()
            || fundamentals.dy_growth_3y.is_none()
            || fundamentals.dy_growth_5y.is_none()
        {
            self.backfill_from_dividends(symbol, &mut fundamentals).await;
        }
        Ok(fundamentals)
    }

    async fn get_price_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        let start_time = day_start(start);
        // get_quote_history treats the end as exclusive; push it one day out.
        let end_time = day_start(end.succ_opt().unwrap_or(end));

        let response = self
            .connector
            .get_quote_history(symbol, start_time.into(), end_time.into())
            .await?;

        // One close per calendar date, keeping the latest observation.
        let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for quote in response.quotes()? {
            let date = Utc
                .timestamp_opt(quote.timestamp as i64, 0)
                .single()
                .map(|ts| ts.date_naive());
            if let Some(date) = date {
                by_date.insert(date, quote.close);
            }
        }

        Ok(by_date
            .into_iter()
            .map(|(date, close)| PricePoint::new(date, close))
            .collect())
    }

    async fn get_dividend_history(
        &self,
        symbol: &str,
    ) -> Result<Vec<DividendEvent>, MarketDataError> {
        self.dividend_history(symbol).await
    }
}

fn raw(value: &Option<RawValue>) -> Option<f64> {
    value.as_ref().and_then(|v| v.raw)
}

fn day_start(date: NaiveDate) -> SystemTime {
    let secs = date.and_time(NaiveTime::MIN).and_utc().timestamp();
    if secs >= 0 {
        UNIX_EPOCH + Duration::from_secs(secs as u64)
    } else {
        UNIX_EPOCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quote_summary_payload() {
        let body = r#"{
            "quoteSummary": {
                "result": [{
                    "price": {
                        "longName": "Banco do Brasil S.A.",
                        "regularMarketPrice": {"raw": 27.35, "fmt": "27.35"}
                    },
                    "summaryProfile": {"sector": "Financial Services"},
                    "summaryDetail": {
                        "dividendYield": {"raw": 0.091, "fmt": "9.10%"},
                        "trailingPE": {"raw": 4.21, "fmt": "4.21"},
                        "marketCap": {"raw": 156000000000.0, "fmt": "156B"}
                    },
                    "defaultKeyStatistics": {"priceToBook": {"raw": 0.87, "fmt": "0.87"}},
                    "financialData": {"returnOnEquity": {"raw": 0.205, "fmt": "20.50%"}}
                }],
                "error": null
            }
        }"#;

        let parsed: QuoteSummaryResponse = serde_json::from_str(body).unwrap();
        let result = parsed.quote_summary.result.as_ref().unwrap().first().unwrap();
        let fundamentals = YahooProvider::fundamentals_from_summary(result);

        assert_eq!(fundamentals.name.as_deref(), Some("Banco do Brasil S.A."));
        assert_eq!(fundamentals.sector.as_deref(), Some("Financial Services"));
        assert_eq!(fundamentals.price, Some(27.35));
        assert_eq!(fundamentals.dividend_yield, Some(0.091));
        assert_eq!(fundamentals.price_earnings, Some(4.21));
        assert_eq!(fundamentals.price_to_book, Some(0.87));
        assert_eq!(fundamentals.return_on_equity, Some(0.205));
        assert_eq!(fundamentals.market_cap, Some(156000000000.0));
        assert_eq!(fundamentals.source.as_deref(), Some("YAHOO"));
    }

    #[test]
    fn missing_modules_leave_fields_unknown() {
        let body = r#"{
            "quoteSummary": {
                "result": [{"price": {"shortName": "VALE"}}],
                "error": null
            }
        }"#;

        let parsed: QuoteSummaryResponse = serde_json::from_str(body).unwrap();
        let result = parsed.quote_summary.result.as_ref().unwrap().first().unwrap();
        let fundamentals = YahooProvider::fundamentals_from_summary(result);

        assert_eq!(fundamentals.name.as_deref(), Some("VALE"));
        assert_eq!(fundamentals.sector, None);
        assert_eq!(fundamentals.dividend_yield, None);
        assert_eq!(fundamentals.price_earnings, None);
    }

    #[test]
    fn parses_chart_dividend_events() {
        let body = r#"{
            "chart": {
                "result": [{
                    "events": {
                        "dividends": {
                            "1718236800": {"amount": 0.35, "date": 1718236800},
                            "1702512000": {"amount": 0.4, "date": 1702512000}
                        }
                    }
                }],
                "error": null
            }
        }"#;

        let parsed: ChartResponse = serde_json::from_str(body).unwrap();
        let dividends = parsed.chart.result.unwrap().remove(0).events.unwrap().dividends.unwrap();
        assert_eq!(dividends.len(), 2);
        assert_eq!(dividends["1718236800"].amount, 0.35);
    }
}
