//! Repository layer - Data access abstraction
//!
//! Each repository trait covers reads against the connection pool; writes
//! run inside a transaction through `TransactionContext`. Both sides share
//! the query functions defined next to each trait.

pub(crate) mod catalog_repository;
pub(crate) mod comment_repository;
pub(crate) mod entities;
pub(crate) mod favorite_repository;
pub(crate) mod user_repository;

pub use catalog_repository::{CatalogRepository, CatalogStore};
pub use comment_repository::{CommentRepository, CommentStore};
pub use favorite_repository::{FavoriteRepository, FavoriteStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use catalog_repository::MockCatalogRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use comment_repository::MockCommentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use favorite_repository::MockFavoriteRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
