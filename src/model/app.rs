use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{market::MarketDataClient, model::auth::AuthContext};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub market: MarketDataClient,
    pub auth: Arc<AuthContext>,
    /// Minimum stored events below which a past week's calendar refreshes
    /// from the provider.
    pub earnings_refresh_threshold: usize,
}
