use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260214_000001_create_stock_table::Stock,
    m20260214_000004_create_watchlist_table::Watchlist,
};

static PK_WATCHLIST_STOCK: &str = "pk_watchlist_stock";
static FK_WATCHLIST_STOCK_WATCHLIST_ID: &str = "fk_watchlist_stock_watchlist_id";
static FK_WATCHLIST_STOCK_STOCK_ID: &str = "fk_watchlist_stock_stock_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WatchlistStock::Table)
                    .if_not_exists()
                    .col(integer(WatchlistStock::WatchlistId))
                    .col(integer(WatchlistStock::StockId))
                    .col(timestamp(WatchlistStock::AddedAt))
                    .primary_key(
                        Index::create()
                            .name(PK_WATCHLIST_STOCK)
                            .col(WatchlistStock::WatchlistId)
                            .col(WatchlistStock::StockId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WATCHLIST_STOCK_WATCHLIST_ID)
                    .from_tbl(WatchlistStock::Table)
                    .from_col(WatchlistStock::WatchlistId)
                    .to_tbl(Watchlist::Table)
                    .to_col(Watchlist::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WATCHLIST_STOCK_STOCK_ID)
                    .from_tbl(WatchlistStock::Table)
                    .from_col(WatchlistStock::StockId)
                    .to_tbl(Stock::Table)
                    .to_col(Stock::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_WATCHLIST_STOCK_STOCK_ID)
                    .table(WatchlistStock::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_WATCHLIST_STOCK_WATCHLIST_ID)
                    .table(WatchlistStock::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WatchlistStock::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WatchlistStock {
    Table,
    WatchlistId,
    StockId,
    AddedAt,
}
