pub use sea_orm_migration::prelude::*;

mod m20260214_000001_create_stock_table;
mod m20260214_000002_create_user_table;
mod m20260214_000003_create_earnings_event_table;
mod m20260214_000004_create_watchlist_table;
mod m20260214_000005_create_watchlist_stock_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260214_000001_create_stock_table::Migration),
            Box::new(m20260214_000002_create_user_table::Migration),
            Box::new(m20260214_000003_create_earnings_event_table::Migration),
            Box::new(m20260214_000004_create_watchlist_table::Migration),
            Box::new(m20260214_000005_create_watchlist_stock_table::Migration),
        ]
    }
}
