//! Builders for market data provider payloads used across tests.

use serde_json::{json, Value};

pub fn search_payload(quotes: Vec<Value>) -> Value {
    json!({ "quotes": quotes })
}

pub fn search_quote(symbol: &str, short_name: &str) -> Value {
    json!({
        "symbol": symbol,
        "shortName": short_name,
        "exchange": "NMS",
        "quoteType": "EQUITY"
    })
}

pub fn quote_payload(result: Vec<Value>) -> Value {
    json!({ "quoteResponse": { "result": result } })
}

pub fn quote(symbol: &str, long_name: &str) -> Value {
    json!({
        "symbol": symbol,
        "longName": long_name,
        "shortName": long_name,
        "fullExchangeName": "NasdaqGS",
        "sector": "Technology",
        "industry": "Consumer Electronics",
        "website": format!("https://{}.example.com", symbol.to_lowercase()),
        "regularMarketPrice": 100.0,
        "regularMarketChange": 1.5,
        "regularMarketChangePercent": 1.52,
        "regularMarketPreviousClose": 98.5
    })
}

pub fn earnings_payload(earnings: Vec<Value>) -> Value {
    json!({ "earnings": earnings })
}

pub fn earnings_item(symbol: &str, company_name: &str, earnings_date: &str) -> Value {
    json!({
        "symbol": symbol,
        "companyShortName": company_name,
        "earningsDate": earnings_date,
        "earningsTime": "AMC",
        "epsEstimate": 1.25,
        "fiscalQuarter": "Q1",
        "fiscalYear": "2026"
    })
}

pub fn chart_payload(symbol: &str) -> Value {
    json!({
        "chart": {
            "result": [
                {
                    "meta": { "symbol": symbol, "regularMarketPrice": 100.0 },
                    "timestamp": [1767225600],
                    "indicators": { "quote": [{ "close": [100.0] }] }
                }
            ],
            "error": null
        }
    })
}
