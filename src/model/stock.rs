use serde::{Deserialize, Serialize};

/// A stored stock record as exposed by the API.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockDto {
    pub id: i32,
    pub symbol: String,
    pub name: Option<String>,
    pub exchange: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub last_earnings_date: Option<String>,
    pub next_earnings_date: Option<String>,
}

impl From<entity::stock::Model> for StockDto {
    fn from(stock: entity::stock::Model) -> Self {
        Self {
            id: stock.id,
            symbol: stock.symbol,
            name: stock.name,
            exchange: stock.exchange,
            sector: stock.sector,
            industry: stock.industry,
            website: stock.website,
            description: stock.description,
            logo: stock.logo,
            last_earnings_date: stock.last_earnings_date.map(|d| d.to_string()),
            next_earnings_date: stock.next_earnings_date.map(|d| d.to_string()),
        }
    }
}
