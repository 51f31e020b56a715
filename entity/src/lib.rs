pub mod earnings_event;
pub mod stock;
pub mod user;
pub mod watchlist;
pub mod watchlist_stock;

pub mod prelude {
    pub use super::earnings_event::Entity as EarningsEvent;
    pub use super::stock::Entity as Stock;
    pub use super::user::Entity as User;
    pub use super::watchlist::Entity as Watchlist;
    pub use super::watchlist_stock::Entity as WatchlistStock;
}
