use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stock::Table)
                    .if_not_exists()
                    .col(pk_auto(Stock::Id))
                    .col(string_uniq(Stock::Symbol))
                    .col(string_null(Stock::Name))
                    .col(string_null(Stock::Exchange))
                    .col(string_null(Stock::Sector))
                    .col(string_null(Stock::Industry))
                    .col(string_null(Stock::Website))
                    .col(text_null(Stock::Description))
                    .col(string_null(Stock::Logo))
                    .col(timestamp_null(Stock::LastEarningsDate))
                    .col(timestamp_null(Stock::NextEarningsDate))
                    .col(timestamp(Stock::CreatedAt))
                    .col(timestamp(Stock::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stock::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Stock {
    Table,
    Id,
    Symbol,
    Name,
    Exchange,
    Sector,
    Industry,
    Website,
    Description,
    Logo,
    LastEarningsDate,
    NextEarningsDate,
    CreatedAt,
    UpdatedAt,
}
