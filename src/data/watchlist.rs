use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct WatchlistRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WatchlistRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        name: &str,
        description: Option<String>,
    ) -> Result<entity::watchlist::Model, DbErr> {
        let watchlist = entity::watchlist::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        watchlist.insert(self.db).await
    }

    pub async fn get_all_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::watchlist::Model>, DbErr> {
        entity::prelude::Watchlist::find()
            .filter(entity::watchlist::Column::UserId.eq(user_id))
            .order_by_asc(entity::watchlist::Column::Id)
            .all(self.db)
            .await
    }

    /// A watchlist by ID, scoped to its owner. Another user's watchlist
    /// resolves to `None` exactly like a missing one.
    pub async fn get_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<entity::watchlist::Model>, DbErr> {
        entity::prelude::Watchlist::find()
            .filter(entity::watchlist::Column::Id.eq(id))
            .filter(entity::watchlist::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn update(
        &self,
        watchlist: entity::watchlist::Model,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<entity::watchlist::Model, DbErr> {
        let mut active: entity::watchlist::ActiveModel = watchlist.into();

        if let Some(name) = name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = description {
            active.description = ActiveValue::Set(Some(description));
        }
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Watchlist::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// The stocks on a watchlist, in insertion order.
    pub async fn stocks(&self, watchlist_id: i32) -> Result<Vec<entity::stock::Model>, DbErr> {
        let rows = entity::prelude::WatchlistStock::find()
            .find_also_related(entity::prelude::Stock)
            .filter(entity::watchlist_stock::Column::WatchlistId.eq(watchlist_id))
            .order_by_asc(entity::watchlist_stock::Column::AddedAt)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().filter_map(|(_, stock)| stock).collect())
    }

    pub async fn get_entry(
        &self,
        watchlist_id: i32,
        stock_id: i32,
    ) -> Result<Option<entity::watchlist_stock::Model>, DbErr> {
        entity::prelude::WatchlistStock::find_by_id((watchlist_id, stock_id))
            .one(self.db)
            .await
    }

    pub async fn add_entry(
        &self,
        watchlist_id: i32,
        stock_id: i32,
    ) -> Result<entity::watchlist_stock::Model, DbErr> {
        let entry = entity::watchlist_stock::ActiveModel {
            watchlist_id: ActiveValue::Set(watchlist_id),
            stock_id: ActiveValue::Set(stock_id),
            added_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entry.insert(self.db).await
    }

    /// Removes a membership row, reporting how many rows went away so the
    /// caller can distinguish a no-op.
    pub async fn remove_entry(&self, watchlist_id: i32, stock_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::WatchlistStock::delete_many()
            .filter(entity::watchlist_stock::Column::WatchlistId.eq(watchlist_id))
            .filter(entity::watchlist_stock::Column::StockId.eq(stock_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
