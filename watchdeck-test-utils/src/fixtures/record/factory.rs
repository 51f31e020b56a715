//! Row factories for seeding the in-memory database in tests.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

pub async fn insert_stock<C: ConnectionTrait>(
    db: &C,
    symbol: &str,
) -> Result<entity::stock::Model, DbErr> {
    entity::stock::ActiveModel {
        symbol: ActiveValue::Set(symbol.to_string()),
        name: ActiveValue::Set(Some(format!("{symbol} Inc."))),
        exchange: ActiveValue::Set(Some("NasdaqGS".to_string())),
        sector: ActiveValue::Set(Some("Technology".to_string())),
        industry: ActiveValue::Set(Some("Software".to_string())),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_user<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> Result<entity::user::Model, DbErr> {
    entity::user::ActiveModel {
        email: ActiveValue::Set(email.to_string()),
        first_name: ActiveValue::Set("Test".to_string()),
        last_name: ActiveValue::Set("User".to_string()),
        is_email_verified: ActiveValue::Set(true),
        google_id: ActiveValue::Set(Some(format!("google-{email}"))),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// A user created through a non-OAuth path, with no Google identity linked.
pub async fn insert_local_user<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> Result<entity::user::Model, DbErr> {
    entity::user::ActiveModel {
        email: ActiveValue::Set(email.to_string()),
        first_name: ActiveValue::Set("Test".to_string()),
        last_name: ActiveValue::Set("User".to_string()),
        is_email_verified: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_watchlist<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    name: &str,
) -> Result<entity::watchlist::Model, DbErr> {
    entity::watchlist::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_watchlist_stock<C: ConnectionTrait>(
    db: &C,
    watchlist_id: i32,
    stock_id: i32,
) -> Result<entity::watchlist_stock::Model, DbErr> {
    entity::watchlist_stock::ActiveModel {
        watchlist_id: ActiveValue::Set(watchlist_id),
        stock_id: ActiveValue::Set(stock_id),
        added_at: ActiveValue::Set(Utc::now().naive_utc()),
    }
    .insert(db)
    .await
}

pub async fn insert_earnings_event<C: ConnectionTrait>(
    db: &C,
    stock_id: i32,
    earnings_date: NaiveDate,
) -> Result<entity::earnings_event::Model, DbErr> {
    entity::earnings_event::ActiveModel {
        stock_id: ActiveValue::Set(stock_id),
        earnings_date: ActiveValue::Set(earnings_date),
        earnings_time: ActiveValue::Set(Some("AMC".to_string())),
        eps_estimate: ActiveValue::Set(Some(1.25)),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}
