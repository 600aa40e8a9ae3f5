//! Comment repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use super::entities::comment::{self, ActiveModel, Entity as CommentEntity};
use crate::domain::{Comment, Target};
use crate::errors::{constraint_error, AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read side of the comment store.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// All comments written by a user, oldest first
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Comment>>;
}

/// Concrete implementation of CommentRepository
pub struct CommentStore {
    db: DatabaseConnection,
}

impl CommentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentStore {
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Comment>> {
        CommentEntity::find()
            .filter(comment::Column::UserId.eq(user_id))
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?
            .into_iter()
            .map(Comment::try_from)
            .collect()
    }
}

/// Insert an active comment. Duplicates are allowed.
pub(crate) async fn insert_comment<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    target: Target,
    comment_text: String,
) -> AppResult<Comment> {
    let columns = target.columns();
    let active_model = ActiveModel {
        id: NotSet,
        comment_text: Set(comment_text),
        user_id: Set(user_id),
        character_id: Set(columns.character_id),
        planet_id: Set(columns.planet_id),
        starship_id: Set(columns.starship_id),
        is_active: Set(true),
    };

    let kind = target.kind();
    let model = active_model.insert(db).await.map_err(|e| {
        constraint_error(
            e,
            || AppError::internal("comments table has no unique constraints"),
            || AppError::not_found(kind.missing_reference_message()),
        )
    })?;

    Comment::try_from(model)
}
