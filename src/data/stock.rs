use chrono::{NaiveDateTime, Utc};
use migration::{Expr, Func, OnConflict, SimpleExpr};
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

/// Provider fields to merge into a stock row. A `None` field preserves
/// whatever the stored row already holds.
#[derive(Debug, Clone, Default)]
pub struct StockUpsert {
    pub symbol: String,
    pub name: Option<String>,
    pub exchange: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
}

pub struct StockRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StockRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the stock or merges the provided fields into the existing row
    /// keyed by symbol, in a single statement.
    ///
    /// Fresh rows fall back to the symbol for the name and "UNKNOWN" for
    /// exchange, sector and industry. On merge, each absent field keeps the
    /// stored value instead of clearing it.
    pub async fn upsert_merge(&self, stock: StockUpsert) -> Result<entity::stock::Model, DbErr> {
        use entity::stock::Column;

        let now = Utc::now().naive_utc();

        let model = entity::stock::ActiveModel {
            symbol: ActiveValue::Set(stock.symbol.clone()),
            name: ActiveValue::Set(Some(
                stock.name.clone().unwrap_or_else(|| stock.symbol.clone()),
            )),
            exchange: ActiveValue::Set(Some(
                stock
                    .exchange
                    .clone()
                    .unwrap_or_else(|| "UNKNOWN".to_string()),
            )),
            sector: ActiveValue::Set(Some(
                stock.sector.clone().unwrap_or_else(|| "UNKNOWN".to_string()),
            )),
            industry: ActiveValue::Set(Some(
                stock
                    .industry
                    .clone()
                    .unwrap_or_else(|| "UNKNOWN".to_string()),
            )),
            website: ActiveValue::Set(stock.website.clone()),
            description: ActiveValue::Set(stock.description.clone()),
            logo: ActiveValue::Set(stock.logo.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let models = entity::prelude::Stock::insert_many([model])
            .on_conflict(
                OnConflict::column(Column::Symbol)
                    .value(Column::Name, merge_or_keep(stock.name, Column::Name))
                    .value(
                        Column::Exchange,
                        merge_or_keep(stock.exchange, Column::Exchange),
                    )
                    .value(Column::Sector, merge_or_keep(stock.sector, Column::Sector))
                    .value(
                        Column::Industry,
                        merge_or_keep(stock.industry, Column::Industry),
                    )
                    .value(
                        Column::Website,
                        merge_or_keep(stock.website, Column::Website),
                    )
                    .value(
                        Column::Description,
                        merge_or_keep(stock.description, Column::Description),
                    )
                    .value(Column::Logo, merge_or_keep(stock.logo, Column::Logo))
                    .value(Column::UpdatedAt, Expr::value(now))
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        models.into_iter().next().ok_or(DbErr::RecordNotInserted)
    }

    pub async fn get_by_symbol(
        &self,
        symbol: &str,
    ) -> Result<Option<entity::stock::Model>, DbErr> {
        entity::prelude::Stock::find()
            .filter(entity::stock::Column::Symbol.eq(symbol))
            .one(self.db)
            .await
    }

    /// Stored rows whose symbol contains the upper-cased query or whose name
    /// contains it verbatim, capped at `limit`.
    pub async fn search_stored(
        &self,
        query: &str,
        limit: u64,
    ) -> Result<Vec<entity::stock::Model>, DbErr> {
        entity::prelude::Stock::find()
            .filter(
                Condition::any()
                    .add(entity::stock::Column::Symbol.contains(query.to_uppercase()))
                    .add(entity::stock::Column::Name.contains(query)),
            )
            .limit(limit)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::stock::Model>, DbErr> {
        entity::prelude::Stock::find_by_id(id).one(self.db).await
    }

    pub async fn set_next_earnings_date(
        &self,
        stock_id: i32,
        next: NaiveDateTime,
    ) -> Result<(), DbErr> {
        entity::prelude::Stock::update_many()
            .col_expr(
                entity::stock::Column::NextEarningsDate,
                Expr::value(Some(next)),
            )
            .col_expr(
                entity::stock::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::stock::Column::Id.eq(stock_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}

/// COALESCE(merge value, stored column): applies the merge value when the
/// provider supplied one and keeps the stored value otherwise.
fn merge_or_keep(merge: Option<String>, column: entity::stock::Column) -> SimpleExpr {
    Func::coalesce([Expr::value(merge), Expr::col(column).into()]).into()
}
