//! Mock endpoints for the market data provider.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::Value;

pub async fn mock_search_endpoint(server: &mut ServerGuard, query: &str, body: Value) -> Mock {
    server
        .mock("GET", "/v1/finance/search")
        .match_query(Matcher::UrlEncoded("q".into(), query.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

pub async fn mock_quote_endpoint(server: &mut ServerGuard, symbol: &str, body: Value) -> Mock {
    server
        .mock("GET", "/v7/finance/quote")
        .match_query(Matcher::UrlEncoded("symbols".into(), symbol.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

pub async fn mock_earnings_endpoint(server: &mut ServerGuard, body: Value) -> Mock {
    server
        .mock("GET", "/v1/finance/earnings")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

pub async fn mock_chart_endpoint(server: &mut ServerGuard, symbol: &str, body: Value) -> Mock {
    server
        .mock("GET", format!("/v8/finance/chart/{symbol}").as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

pub async fn mock_failing_endpoint(server: &mut ServerGuard, path: &str) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await
}
