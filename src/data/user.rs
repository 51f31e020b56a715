use chrono::Utc;
use migration::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an account for a user arriving through OAuth. The identity
    /// provider vouched for the email, so it starts out verified.
    pub async fn create_oauth_user(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        picture: Option<String>,
        google_id: &str,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            picture: ActiveValue::Set(picture),
            is_email_verified: ActiveValue::Set(true),
            google_id: ActiveValue::Set(Some(google_id.to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Links a Google identity onto an existing account. The stored picture
    /// wins; the provider's picture only fills an empty slot.
    pub async fn attach_google_identity(
        &self,
        user_id: i32,
        google_id: &str,
        picture: Option<String>,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::GoogleId,
                Expr::value(Some(google_id.to_string())),
            )
            .col_expr(entity::user::Column::IsEmailVerified, Expr::value(true))
            .col_expr(
                entity::user::Column::Picture,
                Func::coalesce([
                    Expr::col(entity::user::Column::Picture).into(),
                    Expr::value(picture),
                ])
                .into(),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        self.get_by_id(user_id).await
    }
}
