mod auth;
mod earnings;
mod market;
mod stock;
mod watchlist;
