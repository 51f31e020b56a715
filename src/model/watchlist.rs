use serde::{Deserialize, Serialize};

use crate::model::stock::StockDto;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWatchlistDto {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWatchlistDto {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddStockDto {
    pub symbol: String,
}

/// A watchlist with the stocks currently on it.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub user_id: i32,
    pub stocks: Vec<StockDto>,
}

impl WatchlistDto {
    pub fn from_watchlist(
        watchlist: entity::watchlist::Model,
        stocks: Vec<entity::stock::Model>,
    ) -> Self {
        Self {
            id: watchlist.id,
            name: watchlist.name,
            description: watchlist.description,
            user_id: watchlist.user_id,
            stocks: stocks.into_iter().map(StockDto::from).collect(),
        }
    }
}
