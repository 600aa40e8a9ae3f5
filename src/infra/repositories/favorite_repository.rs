//! Favorite repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use super::entities::favorite::{self, target_column, ActiveModel, Entity as FavoriteEntity};
use crate::domain::{Favorite, Target};
use crate::errors::{constraint_error, AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read side of the favorite store.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Find the favorite a user holds for a target
    async fn find(&self, user_id: i32, target: Target) -> AppResult<Option<Favorite>>;

    /// All favorites of a user, oldest first
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Favorite>>;
}

/// Concrete implementation of FavoriteRepository
pub struct FavoriteStore {
    db: DatabaseConnection,
}

impl FavoriteStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteStore {
    async fn find(&self, user_id: i32, target: Target) -> AppResult<Option<Favorite>> {
        find_favorite(&self.db, user_id, target).await
    }

    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Favorite>> {
        FavoriteEntity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .order_by_asc(favorite::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?
            .into_iter()
            .map(Favorite::try_from)
            .collect()
    }
}

pub(crate) async fn find_favorite<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    target: Target,
) -> AppResult<Option<Favorite>> {
    FavoriteEntity::find()
        .filter(favorite::Column::UserId.eq(user_id))
        .filter(target_column(&target).eq(target.id()))
        .one(db)
        .await
        .map_err(AppError::from)?
        .map(Favorite::try_from)
        .transpose()
}

/// Insert a favorite. Duplicates and dangling references are reported by the
/// store's unique index and foreign keys.
pub(crate) async fn insert_favorite<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    target: Target,
) -> AppResult<Favorite> {
    let columns = target.columns();
    let active_model = ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        character_id: Set(columns.character_id),
        planet_id: Set(columns.planet_id),
        starship_id: Set(columns.starship_id),
    };

    let kind = target.kind();
    let model = active_model.insert(db).await.map_err(|e| {
        constraint_error(
            e,
            || AppError::conflict(kind.favorite_exists_message()),
            || AppError::not_found(kind.missing_reference_message()),
        )
    })?;

    Favorite::try_from(model)
}

pub(crate) async fn delete_favorite<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<bool> {
    let result = FavoriteEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(AppError::from)?;

    Ok(result.rows_affected > 0)
}
