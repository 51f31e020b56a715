pub mod earnings;
pub mod stock;
pub mod user;
pub mod watchlist;
