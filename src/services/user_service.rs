//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.
//! DDD: Orchestrates domain operations via Unit of Work.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MSG_EMAIL_TAKEN, MSG_NO_USERS};
use crate::domain::{CreateUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a user. The password is hashed before it reaches the store.
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// List every user. An empty table is reported as not found.
    async fn list_users(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        // The unique index still guards against a concurrent insert
        if self.uow.users().find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict(MSG_EMAIL_TAKEN));
        }

        let password = Password::new(&input.password)?;
        let email = input.email;

        let user = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move { ctx.users().create(email, password).await })
            })
            .await?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        let users = self.uow.users().list().await?;
        if users.is_empty() {
            return Err(AppError::not_found(MSG_NO_USERS));
        }
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use crate::services::test_support::TestUnitOfWork;

    fn sample_user(id: i32) -> User {
        User::new(
            id,
            format!("pilot{}@rebellion.org", id),
            Password::from_hash("$argon2id$v=19$stub".to_string()),
        )
    }

    fn service(repo: MockUserRepository) -> UserManager<TestUnitOfWork> {
        UserManager::new(Arc::new(TestUnitOfWork::default().with_users(repo)))
    }

    #[tokio::test]
    async fn test_list_users_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![sample_user(1), sample_user(2)]));

        let users = service(repo).list_users().await.unwrap();
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn test_list_users_empty_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(|| Ok(vec![]));

        let err = service(repo).list_users().await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == MSG_NO_USERS));
    }

    #[tokio::test]
    async fn test_create_user_rejects_taken_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "pilot1@rebellion.org")
            .returning(|_| Ok(Some(sample_user(1))));

        let err = service(repo)
            .create_user(CreateUser {
                email: "pilot1@rebellion.org".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(ref msg) if msg == MSG_EMAIL_TAKEN));
    }
}
