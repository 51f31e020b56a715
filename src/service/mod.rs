pub mod auth;
pub mod earnings;
pub mod stock;
pub mod watchlist;
