use axum::extract::State;
use mockito::Matcher;
use watchdeck::controller::market::indices;
use watchdeck_test_utils::prelude::*;

use crate::setup::app_setup;

/// Expect one entry per tracked index with failed symbols zeroed out
#[tokio::test]
async fn zeroes_failed_symbols() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app_setup().await?;

    // mockito serves the first matching mock, so the specific ^GSPC mock
    // goes in before the catch-all failure
    let payload = market::factory::quote_payload(vec![market::factory::quote("^GSPC", "S&P 500")]);
    market::mockito::mock_quote_endpoint(&mut app.test.server, "^GSPC", payload).await;

    app.test
        .server
        .mock("GET", "/v7/finance/quote")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let entries = indices(State(app.state)).await.0;

    assert_eq!(entries.len(), 4);

    let sp500 = entries
        .iter()
        .find(|entry| entry.symbol == "^GSPC")
        .ok_or("missing ^GSPC entry")?;
    assert!(!sp500.error);
    assert_eq!(sp500.price, 100.0);

    let bitcoin = entries
        .iter()
        .find(|entry| entry.symbol == "BTC-USD")
        .ok_or("missing BTC-USD entry")?;
    assert!(bitcoin.error);
    assert_eq!(bitcoin.price, 0.0);

    Ok(())
}
