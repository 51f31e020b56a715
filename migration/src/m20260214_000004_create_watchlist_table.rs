use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260214_000002_create_user_table::User;

static IDX_WATCHLIST_USER_ID: &str = "idx_watchlist_user_id";
static FK_WATCHLIST_USER_ID: &str = "fk_watchlist_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Watchlist::Table)
                    .if_not_exists()
                    .col(pk_auto(Watchlist::Id))
                    .col(string(Watchlist::Name))
                    .col(string_null(Watchlist::Description))
                    .col(integer(Watchlist::UserId))
                    .col(timestamp(Watchlist::CreatedAt))
                    .col(timestamp(Watchlist::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WATCHLIST_USER_ID)
                    .table(Watchlist::Table)
                    .col(Watchlist::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WATCHLIST_USER_ID)
                    .from_tbl(Watchlist::Table)
                    .from_col(Watchlist::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
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
                    .name(FK_WATCHLIST_USER_ID)
                    .table(Watchlist::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WATCHLIST_USER_ID)
                    .table(Watchlist::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Watchlist::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Watchlist {
    Table,
    Id,
    Name,
    Description,
    UserId,
    CreatedAt,
    UpdatedAt,
}
