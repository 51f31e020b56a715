pub mod api;
pub mod app;
pub mod auth;
pub mod earnings;
pub mod market;
pub mod stock;
pub mod user;
pub mod watchlist;
