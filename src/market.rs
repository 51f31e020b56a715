//! HTTP client for the upstream market data provider.
//!
//! All provider access goes through [`MarketDataClient`] so the base URL can
//! be pointed at a mock server in tests. Requests carry a 10 second timeout;
//! a provider that hangs must never hang a handler with it.

use std::time::Duration;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{error::market::MarketError, model::market::MarketIndexDto};

/// Index symbols surfaced on the market overview, with display name
/// fallbacks for when the provider omits one.
const INDEX_SYMBOLS: [(&str, &str); 4] = [
    ("^GSPC", "S&P 500"),
    ("^IXIC", "NASDAQ"),
    ("^DJI", "Dow Jones"),
    ("BTC-USD", "Bitcoin"),
];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct MarketDataClient {
    http: reqwest::Client,
    base_url: String,
}

/// A quote row from the provider's quote endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockQuote {
    pub symbol: String,
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    pub full_exchange_name: Option<String>,
    pub exchange: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub long_business_summary: Option<String>,
    pub regular_market_price: Option<f64>,
    pub regular_market_change: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
    pub regular_market_previous_close: Option<f64>,
}

/// A match row from the provider's symbol search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchQuote {
    pub symbol: String,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub exchange: Option<String>,
    pub quote_type: Option<String>,
}

/// An upcoming or past earnings report row from the provider's calendar
/// endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EarningsItem {
    pub symbol: String,
    pub company_short_name: Option<String>,
    /// ISO date (YYYY-MM-DD) of the report.
    pub earnings_date: String,
    /// "BMO" or "AMC" when the provider knows the session.
    pub earnings_time: Option<String>,
    pub eps_estimate: Option<f64>,
    pub eps_actual: Option<f64>,
    pub revenue_estimate: Option<f64>,
    pub revenue_actual: Option<f64>,
    pub fiscal_quarter: Option<String>,
    pub fiscal_year: Option<String>,
}

/// Optional chart query knobs; each falls back to the provider default the
/// original frontend relied on.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartQuery {
    pub interval: Option<String>,
    pub range: Option<String>,
    pub include_pre_post: Option<String>,
    pub events: Option<String>,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    quotes: Vec<SearchQuote>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteEnvelope {
    quote_response: QuoteResult,
}

#[derive(Deserialize)]
struct QuoteResult {
    #[serde(default)]
    result: Vec<StockQuote>,
}

#[derive(Deserialize)]
struct EarningsResponse {
    #[serde(default)]
    earnings: Vec<EarningsItem>,
}

impl MarketDataClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, MarketError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Searches the provider for symbols matching a free text query.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchQuote>, MarketError> {
        let response: SearchResponse = self
            .get_json("/v1/finance/search", &[("q", query)])
            .await?;

        Ok(response.quotes)
    }

    /// Fetches the quote for a single symbol. `None` when the provider has
    /// no data for it.
    pub async fn quote(&self, symbol: &str) -> Result<Option<StockQuote>, MarketError> {
        let response: QuoteEnvelope = self
            .get_json("/v7/finance/quote", &[("symbols", symbol)])
            .await?;

        Ok(response.quote_response.result.into_iter().next())
    }

    /// Fetches all earnings reports scheduled between two dates, inclusive.
    pub async fn earnings(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<EarningsItem>, MarketError> {
        let response: EarningsResponse = self
            .get_json(
                "/v1/finance/earnings",
                &[("from", &from.to_string()), ("to", &to.to_string())],
            )
            .await?;

        Ok(response.earnings)
    }

    /// Fetches chart data for a symbol and passes the provider payload
    /// through untouched.
    pub async fn chart(
        &self,
        symbol: &str,
        query: &ChartQuery,
    ) -> Result<serde_json::Value, MarketError> {
        let params = [
            ("interval", query.interval.as_deref().unwrap_or("1d")),
            ("range", query.range.as_deref().unwrap_or("1mo")),
            (
                "includePrePost",
                query.include_pre_post.as_deref().unwrap_or("false"),
            ),
            ("events", query.events.as_deref().unwrap_or("div,split")),
        ];

        self.get_json(&format!("/v8/finance/chart/{symbol}"), &params)
            .await
    }

    /// Quotes the major market indices. Symbols the provider fails on are
    /// reported as zeroed placeholders with `error` set rather than failing
    /// the whole overview.
    pub async fn market_indices(&self) -> Vec<MarketIndexDto> {
        let mut indices = Vec::with_capacity(INDEX_SYMBOLS.len());

        for (symbol, label) in INDEX_SYMBOLS {
            match self.quote(symbol).await {
                Ok(Some(quote)) => indices.push(MarketIndexDto {
                    symbol: symbol.to_string(),
                    name: quote.short_name.unwrap_or_else(|| label.to_string()),
                    price: quote.regular_market_price.unwrap_or_default(),
                    change: quote.regular_market_change.unwrap_or_default(),
                    change_percent: quote.regular_market_change_percent.unwrap_or_default(),
                    previous_close: quote.regular_market_previous_close.unwrap_or_default(),
                    error: false,
                }),
                Ok(None) => {
                    tracing::warn!(symbol = %symbol, "provider returned no quote for index");

                    indices.push(MarketIndexDto::placeholder(symbol, label));
                }
                Err(err) => {
                    tracing::warn!(symbol = %symbol, "failed to quote index: {}", err);

                    indices.push(MarketIndexDto::placeholder(symbol, label));
                }
            }
        }

        indices
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, MarketError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self.http.get(&url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(MarketError::UpstreamStatus {
                endpoint: endpoint.to_string(),
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }
}
