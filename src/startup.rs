use sea_orm::DatabaseConnection;

use crate::{config::Config, error::Error, market::MarketDataClient};

/// Build the market data client against the configured provider base URL
pub fn build_market_client(config: &Config) -> Result<MarketDataClient, Error> {
    let market = MarketDataClient::new(config.market_data_url.clone())?;

    Ok(market)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
