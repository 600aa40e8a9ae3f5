//! Comment service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MIN_ENTITY_ID, MSG_COMMENT_REQUIRED, MSG_USER_NOT_FOUND};
use crate::domain::{Comment, Target};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait CommentService: Send + Sync {
    /// Attach a comment to a target. The target itself is checked by the
    /// store's foreign keys.
    async fn add(&self, user_id: i32, target: Target, comment_text: String) -> AppResult<Comment>;

    /// Comments written by an existing user (possibly none).
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Comment>>;
}

pub struct CommentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CommentManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CommentService for CommentManager<U> {
    async fn add(&self, user_id: i32, target: Target, comment_text: String) -> AppResult<Comment> {
        if user_id < MIN_ENTITY_ID || comment_text.is_empty() {
            return Err(AppError::validation(MSG_COMMENT_REQUIRED));
        }

        let comment = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move { ctx.comments().create(user_id, target, comment_text).await })
            })
            .await?;

        tracing::info!(comment_id = comment.id, user_id, target = %target.kind(), "Comment added");
        Ok(comment)
    }

    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Comment>> {
        if self.uow.users().find_by_id(user_id).await?.is_none() {
            return Err(AppError::not_found(MSG_USER_NOT_FOUND));
        }

        self.uow.comments().list_for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Password, User};
    use crate::infra::{MockCommentRepository, MockUserRepository};
    use crate::services::test_support::TestUnitOfWork;

    fn service(
        users: MockUserRepository,
        comments: MockCommentRepository,
    ) -> CommentManager<TestUnitOfWork> {
        CommentManager::new(Arc::new(
            TestUnitOfWork::default()
                .with_users(users)
                .with_comments(comments),
        ))
    }

    #[tokio::test]
    async fn test_add_rejects_empty_text() {
        let err = service(MockUserRepository::new(), MockCommentRepository::new())
            .add(1, Target::Planet(1), String::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == MSG_COMMENT_REQUIRED));
    }

    #[tokio::test]
    async fn test_add_rejects_missing_user() {
        let err = service(MockUserRepository::new(), MockCommentRepository::new())
            .add(0, Target::Planet(1), "nice planet".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == MSG_COMMENT_REQUIRED));
    }

    #[tokio::test]
    async fn test_list_for_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|id| {
            Ok(Some(User::new(
                id,
                "rey@jakku.net".to_string(),
                Password::from_hash("$argon2id$v=19$stub".to_string()),
            )))
        });
        let mut comments = MockCommentRepository::new();
        comments.expect_list_for_user().returning(|user_id| {
            Ok(vec![Comment {
                id: 1,
                user_id,
                target: Target::Planet(1),
                comment_text: "nice planet".to_string(),
                is_active: true,
            }])
        });

        let result = service(users, comments).list_for_user(3).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].comment_text, "nice planet");
    }

    #[tokio::test]
    async fn test_list_for_missing_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let err = service(users, MockCommentRepository::new())
            .list_for_user(3)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
