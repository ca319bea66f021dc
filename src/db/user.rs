use crate::db::database_service::DatabaseService;
use crate::db::progress::default_progress;
use crate::types::{error::AppError, user};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    SqlErr, TransactionTrait,
};
use tracing::info;

/// A signup that lost the race to the unique index gets the same answer as
/// one caught by the up-front checks.
fn signup_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains("email") => {
            AppError::BadRequest("Email already registered".into())
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::BadRequest("Username already taken".into())
        }
        _ => err.into(),
    }
}

impl DatabaseService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn find_user_by_id(&self, id: i32) -> Result<Option<UserModel>, AppError> {
        Ok(User::find_by_id(id).one(&self.database_connection).await?)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?)
    }

    /// Signup: user row plus a fresh progress row, all or nothing.
    pub async fn create_user(&self, payload: user::DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::BadRequest("Email already registered".into()));
        }
        if self.user_exists_by_username(&payload.username).await? {
            return Err(AppError::BadRequest("Username already taken".into()));
        }

        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        let created = UserActive {
            username: Set(payload.username),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            created_at: Set(now),
            last_login: Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(signup_conflict)?;

        default_progress(created.id, now).insert(&txn).await?;

        txn.commit().await?;
        info!("registered user {} ({})", created.id, created.username);
        Ok(created)
    }

    pub async fn touch_last_login(&self, user: UserModel) -> Result<UserModel, AppError> {
        let mut am: UserActive = user.into();
        am.last_login = Set(Some(Utc::now()));
        Ok(am.update(&self.database_connection).await?)
    }
}
