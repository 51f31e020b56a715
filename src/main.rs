use std::sync::Arc;

use watchdeck::{
    config::Config,
    error::Error,
    model::app::AppState,
    router,
    service::auth::build_auth_context,
    startup::{build_market_client, connect_to_database},
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = connect_to_database(&config).await?;
    let market = build_market_client(&config)?;
    let auth = Arc::new(build_auth_context(&config)?);

    let state = AppState {
        db,
        market,
        auth,
        earnings_refresh_threshold: config.earnings_refresh_threshold,
    };

    let app = router::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
