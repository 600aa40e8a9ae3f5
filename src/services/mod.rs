//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services use Unit of Work pattern for centralized repository
//! access and transaction management.

mod catalog_service;
mod comment_service;
pub mod container;
mod favorite_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use catalog_service::{CatalogManager, CatalogService};
pub use comment_service::{CommentManager, CommentService};
pub use favorite_service::{FavoriteManager, FavoriteService};
pub use user_service::{UserManager, UserService};

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::errors::{AppError, AppResult};
    use crate::infra::{
        CatalogRepository, CommentRepository, FavoriteRepository, MockCatalogRepository,
        MockCommentRepository, MockFavoriteRepository, MockUserRepository, TransactionContext,
        TxFuture, UnitOfWork, UserRepository,
    };

    /// UnitOfWork over mocked repositories. Transactions need a real
    /// connection and always fail here, by default with an internal error.
    pub struct TestUnitOfWork {
        users: Arc<MockUserRepository>,
        catalog: Arc<MockCatalogRepository>,
        favorites: Arc<MockFavoriteRepository>,
        comments: Arc<MockCommentRepository>,
        transaction_error: fn() -> AppError,
    }

    fn unsupported_transaction() -> AppError {
        AppError::internal("Transactions not supported in test mock")
    }

    impl Default for TestUnitOfWork {
        fn default() -> Self {
            Self {
                users: Arc::new(MockUserRepository::new()),
                catalog: Arc::new(MockCatalogRepository::new()),
                favorites: Arc::new(MockFavoriteRepository::new()),
                comments: Arc::new(MockCommentRepository::new()),
                transaction_error: unsupported_transaction,
            }
        }
    }

    impl TestUnitOfWork {
        pub fn with_users(mut self, repo: MockUserRepository) -> Self {
            self.users = Arc::new(repo);
            self
        }

        pub fn with_catalog(mut self, repo: MockCatalogRepository) -> Self {
            self.catalog = Arc::new(repo);
            self
        }

        pub fn with_favorites(mut self, repo: MockFavoriteRepository) -> Self {
            self.favorites = Arc::new(repo);
            self
        }

        pub fn with_comments(mut self, repo: MockCommentRepository) -> Self {
            self.comments = Arc::new(repo);
            self
        }

        /// Error every transaction fails with.
        pub fn with_transaction_error(mut self, error: fn() -> AppError) -> Self {
            self.transaction_error = error;
            self
        }
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.users.clone()
        }

        fn catalog(&self) -> Arc<dyn CatalogRepository> {
            self.catalog.clone()
        }

        fn favorites(&self) -> Arc<dyn FavoriteRepository> {
            self.favorites.clone()
        }

        fn comments(&self) -> Arc<dyn CommentRepository> {
            self.comments.clone()
        }

        async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
            T: Send,
        {
            Err((self.transaction_error)())
        }

        async fn transaction_serializable<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
            T: Send,
        {
            Err((self.transaction_error)())
        }
    }
}
