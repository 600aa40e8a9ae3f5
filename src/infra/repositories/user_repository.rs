//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::config::MSG_EMAIL_TAKEN;
use crate::domain::{Password, User};
use crate::errors::{constraint_error, AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read side of the user store.
///
/// Users are only ever created through a transaction (see `TxUserRepository`).
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users, oldest first
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        find_user(&self.db, id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}

pub(crate) async fn find_user<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<User>> {
    let result = UserEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(AppError::from)?;

    Ok(result.map(User::from))
}

/// Insert an active user. A taken email surfaces as a conflict.
pub(crate) async fn insert_user<C: ConnectionTrait>(
    db: &C,
    email: String,
    password: Password,
) -> AppResult<User> {
    let active_model = ActiveModel {
        id: NotSet,
        email: Set(email),
        password: Set(password.into_string()),
        is_active: Set(true),
    };

    let model = active_model.insert(db).await.map_err(|e| {
        constraint_error(
            e,
            || AppError::conflict(MSG_EMAIL_TAKEN),
            || AppError::internal("users table has no foreign keys"),
        )
    })?;

    Ok(User::from(model))
}
