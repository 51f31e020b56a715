use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stock")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub symbol: String,
    pub name: Option<String>,
    pub exchange: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub logo: Option<String>,
    pub last_earnings_date: Option<DateTime>,
    pub next_earnings_date: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::earnings_event::Entity")]
    EarningsEvent,
    #[sea_orm(has_many = "super::watchlist_stock::Entity")]
    WatchlistStock,
}

impl Related<super::earnings_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EarningsEvent.def()
    }
}

impl Related<super::watchlist_stock::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WatchlistStock.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
