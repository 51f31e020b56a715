use serde::{Deserialize, Serialize};

/// A major market index quote, or a zeroed placeholder when the provider
/// could not be reached for that symbol.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketIndexDto {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub previous_close: f64,
    pub error: bool,
}

impl MarketIndexDto {
    /// Zeroed entry reported when the provider fails for a symbol.
    pub fn placeholder(symbol: &str, name: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price: 0.0,
            change: 0.0,
            change_percent: 0.0,
            previous_close: 0.0,
            error: true,
        }
    }
}
