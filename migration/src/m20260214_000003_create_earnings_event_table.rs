use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260214_000001_create_stock_table::Stock;

static IDX_EARNINGS_EVENT_STOCK_ID_EARNINGS_DATE: &str =
    "idx_earnings_event_stock_id_earnings_date";
static FK_EARNINGS_EVENT_STOCK_ID: &str = "fk_earnings_event_stock_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EarningsEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(EarningsEvent::Id))
                    .col(integer(EarningsEvent::StockId))
                    .col(date(EarningsEvent::EarningsDate))
                    .col(string_null(EarningsEvent::EarningsTime))
                    .col(double_null(EarningsEvent::EpsEstimate))
                    .col(double_null(EarningsEvent::EpsActual))
                    .col(double_null(EarningsEvent::RevenueEstimate))
                    .col(double_null(EarningsEvent::RevenueActual))
                    .col(string_null(EarningsEvent::FiscalQuarter))
                    .col(string_null(EarningsEvent::FiscalYear))
                    .col(timestamp(EarningsEvent::CreatedAt))
                    .col(timestamp(EarningsEvent::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One event per (stock, earnings date); reconciliation upserts rely on this
        manager
            .create_index(
                Index::create()
                    .name(IDX_EARNINGS_EVENT_STOCK_ID_EARNINGS_DATE)
                    .table(EarningsEvent::Table)
                    .col(EarningsEvent::StockId)
                    .col(EarningsEvent::EarningsDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EARNINGS_EVENT_STOCK_ID)
                    .from_tbl(EarningsEvent::Table)
                    .from_col(EarningsEvent::StockId)
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
                    .name(FK_EARNINGS_EVENT_STOCK_ID)
                    .table(EarningsEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EARNINGS_EVENT_STOCK_ID_EARNINGS_DATE)
                    .table(EarningsEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EarningsEvent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EarningsEvent {
    Table,
    Id,
    StockId,
    EarningsDate,
    EarningsTime,
    EpsEstimate,
    EpsActual,
    RevenueEstimate,
    RevenueActual,
    FiscalQuarter,
    FiscalYear,
    CreatedAt,
    UpdatedAt,
}
