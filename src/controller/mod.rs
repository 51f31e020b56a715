pub mod auth;
pub mod earnings;
pub mod market;
pub mod stock;
pub mod watchlist;
