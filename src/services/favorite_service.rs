//! Favorite service - users marking catalog records.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{
    MIN_ENTITY_ID, MSG_NO_FAVORITES, MSG_USER_ID_MISSING, MSG_USER_ID_REQUIRED, MSG_USER_NOT_FOUND,
};
use crate::domain::{Favorite, Target};
use crate::errors::{is_serialization_failure, AppError, AppResult};
use crate::infra::UnitOfWork;

/// Favorite service trait for dependency injection.
#[async_trait]
pub trait FavoriteService: Send + Sync {
    /// Favorites of an existing user. A user without favorites is reported
    /// as not found.
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Favorite>>;

    /// Mark a target as favorite. Fails with `Conflict` if already marked.
    async fn add(&self, user_id: i32, target: Target) -> AppResult<Favorite>;

    /// Remove the favorite a user holds for a target.
    async fn remove(&self, user_id: Option<i32>, target: Target) -> AppResult<()>;
}

/// Concrete implementation of FavoriteService using Unit of Work.
pub struct FavoriteManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> FavoriteManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

/// Non-positive ids are treated as absent.
fn present(user_id: Option<i32>) -> Option<i32> {
    user_id.filter(|id| *id >= MIN_ENTITY_ID)
}

#[async_trait]
impl<U: UnitOfWork> FavoriteService for FavoriteManager<U> {
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Favorite>> {
        let user_id =
            present(Some(user_id)).ok_or_else(|| AppError::validation(MSG_USER_ID_MISSING))?;

        if self.uow.users().find_by_id(user_id).await?.is_none() {
            return Err(AppError::not_found(MSG_USER_NOT_FOUND));
        }

        let favorites = self.uow.favorites().list_for_user(user_id).await?;
        if favorites.is_empty() {
            return Err(AppError::not_found(MSG_NO_FAVORITES));
        }
        Ok(favorites)
    }

    async fn add(&self, user_id: i32, target: Target) -> AppResult<Favorite> {
        let user_id =
            present(Some(user_id)).ok_or_else(|| AppError::validation(MSG_USER_ID_REQUIRED))?;

        let favorite = self
            .uow
            .transaction_serializable(move |ctx| {
                Box::pin(async move {
                    let favorites = ctx.favorites();
                    if favorites.find(user_id, target).await?.is_some() {
                        return Err(AppError::conflict(target.kind().favorite_exists_message()));
                    }
                    favorites.create(user_id, target).await
                })
            })
            .await
            .map_err(|e| {
                // A concurrent identical add won the race
                if is_serialization_failure(&e) {
                    AppError::conflict(target.kind().favorite_exists_message())
                } else {
                    e
                }
            })?;

        tracing::info!(user_id, target = %target.kind(), target_id = target.id(), "Favorite added");
        Ok(favorite)
    }

    async fn remove(&self, user_id: Option<i32>, target: Target) -> AppResult<()> {
        let user_id = present(user_id).ok_or_else(|| AppError::validation(MSG_USER_ID_REQUIRED))?;

        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let favorites = ctx.favorites();
                    let favorite = favorites.find(user_id, target).await?.ok_or_else(|| {
                        AppError::not_found(target.kind().favorite_not_found_message())
                    })?;
                    favorites.delete(favorite.id).await?;
                    Ok(())
                })
            })
            .await?;

        tracing::info!(user_id, target = %target.kind(), target_id = target.id(), "Favorite removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Password, User};
    use crate::errors::test_support::coded_db_error;
    use crate::infra::{MockFavoriteRepository, MockUserRepository};
    use crate::services::test_support::TestUnitOfWork;
    use mockall::predicate::eq;

    fn existing_user() -> MockUserRepository {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|id| {
            Ok(Some(User::new(
                id,
                "han@falcon.space".to_string(),
                Password::from_hash("$argon2id$v=19$stub".to_string()),
            )))
        });
        users
    }

    fn service(
        users: MockUserRepository,
        favorites: MockFavoriteRepository,
    ) -> FavoriteManager<TestUnitOfWork> {
        FavoriteManager::new(Arc::new(
            TestUnitOfWork::default()
                .with_users(users)
                .with_favorites(favorites),
        ))
    }

    #[tokio::test]
    async fn test_list_for_user_returns_favorites() {
        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_list_for_user()
            .with(eq(1))
            .returning(|user_id| {
                Ok(vec![Favorite {
                    id: 1,
                    user_id,
                    target: Target::Planet(2),
                }])
            });

        let result = service(existing_user(), favorites).list_for_user(1).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].target, Target::Planet(2));
    }

    #[tokio::test]
    async fn test_list_for_missing_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let err = service(users, MockFavoriteRepository::new())
            .list_for_user(5)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == MSG_USER_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_list_without_favorites_is_not_found() {
        let mut favorites = MockFavoriteRepository::new();
        favorites.expect_list_for_user().returning(|_| Ok(vec![]));

        let err = service(existing_user(), favorites)
            .list_for_user(1)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == MSG_NO_FAVORITES));
    }

    #[tokio::test]
    async fn test_list_rejects_non_positive_user_id() {
        let err = service(MockUserRepository::new(), MockFavoriteRepository::new())
            .list_for_user(0)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == MSG_USER_ID_MISSING));
    }

    #[tokio::test]
    async fn test_add_requires_user_id() {
        let err = service(MockUserRepository::new(), MockFavoriteRepository::new())
            .add(0, Target::Planet(1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == MSG_USER_ID_REQUIRED));
    }

    #[tokio::test]
    async fn test_add_losing_a_concurrent_race_is_a_duplicate() {
        let uow = TestUnitOfWork::default()
            .with_transaction_error(|| AppError::Database(coded_db_error("40001")));

        let err = FavoriteManager::new(Arc::new(uow))
            .add(1, Target::Planet(1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref msg) if msg == "Planet already a favorite"));
    }

    #[tokio::test]
    async fn test_add_keeps_other_storage_failures() {
        let uow = TestUnitOfWork::default()
            .with_transaction_error(|| AppError::Database(coded_db_error("08006")));

        let err = FavoriteManager::new(Arc::new(uow))
            .add(1, Target::Planet(1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_remove_requires_user_id() {
        let err = service(MockUserRepository::new(), MockFavoriteRepository::new())
            .remove(None, Target::Starship(1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == MSG_USER_ID_REQUIRED));
    }
}
