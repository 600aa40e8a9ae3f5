//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and owns transaction lifecycle: every
//! mutation runs inside `transaction` / `transaction_serializable`, which
//! commits on `Ok` and rolls back on `Err` before the error is returned.

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, IsolationLevel,
    TransactionTrait,
};
use std::sync::Arc;

use super::repositories::{
    catalog_repository, comment_repository, favorite_repository, user_repository,
    CatalogRepository, CatalogStore, CommentRepository, CommentStore, FavoriteRepository,
    FavoriteStore, UserRepository, UserStore,
};
use crate::domain::{CatalogDraft, CatalogEntry, Comment, Favorite, Password, Target, TargetKind, User};
use crate::errors::{AppError, AppResult};

/// Boxed future returned by transaction closures.
pub type TxFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction management.
/// Note: This trait is not mockable directly due to generic methods.
/// For testing, mock at the repository level or use an in-memory database.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get catalog repository
    fn catalog(&self) -> Arc<dyn CatalogRepository>;

    /// Get favorite repository
    fn favorites(&self) -> Arc<dyn FavoriteRepository>;

    /// Get comment repository
    fn comments(&self) -> Arc<dyn CommentRepository>;

    /// Execute a closure within a transaction (READ COMMITTED).
    ///
    /// The transaction is committed on success or rolled back on error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;

    /// Execute a closure within a transaction with serializable isolation.
    ///
    /// Used for check-then-insert sequences.
    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository { txn: self.txn }
    }

    pub fn catalog(&self) -> TxCatalogRepository<'_> {
        TxCatalogRepository { txn: self.txn }
    }

    pub fn favorites(&self) -> TxFavoriteRepository<'_> {
        TxFavoriteRepository { txn: self.txn }
    }

    pub fn comments(&self) -> TxCommentRepository<'_> {
        TxCommentRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    catalog_repo: Arc<CatalogStore>,
    favorite_repo: Arc<FavoriteStore>,
    comment_repo: Arc<CommentStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            catalog_repo: Arc::new(CatalogStore::new(db.clone())),
            favorite_repo: Arc::new(FavoriteStore::new(db.clone())),
            comment_repo: Arc::new(CommentStore::new(db.clone())),
            db,
        }
    }

    /// Internal transaction execution with configurable isolation level
    async fn execute_transaction<F, T>(&self, isolation: IsolationLevel, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        // SQLite transactions are already serializable and take no isolation level
        let isolation = match self.db.get_database_backend() {
            DbBackend::Sqlite => None,
            _ => Some(isolation),
        };

        let txn = self
            .db
            .begin_with_config(isolation, None)
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                } else {
                    tracing::debug!("Transaction rolled back: {}", e);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogRepository> {
        self.catalog_repo.clone()
    }

    fn favorites(&self) -> Arc<dyn FavoriteRepository> {
        self.favorite_repo.clone()
    }

    fn comments(&self) -> Arc<dyn CommentRepository> {
        self.comment_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        self.execute_transaction(IsolationLevel::ReadCommitted, f).await
    }

    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        self.execute_transaction(IsolationLevel::Serializable, f).await
    }
}

/// Transaction-aware user repository.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxUserRepository<'_> {
    pub async fn create(&self, email: String, password: Password) -> AppResult<User> {
        user_repository::insert_user(self.txn, email, password).await
    }
}

/// Transaction-aware catalog repository.
pub struct TxCatalogRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxCatalogRepository<'_> {
    pub async fn create(&self, draft: CatalogDraft) -> AppResult<CatalogEntry> {
        catalog_repository::insert_entry(self.txn, draft).await
    }

    pub async fn update(&self, id: i32, draft: CatalogDraft) -> AppResult<Option<CatalogEntry>> {
        catalog_repository::update_entry(self.txn, id, draft).await
    }

    pub async fn delete(&self, kind: TargetKind, id: i32) -> AppResult<bool> {
        catalog_repository::delete_entry(self.txn, kind, id).await
    }
}

/// Transaction-aware favorite repository.
pub struct TxFavoriteRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxFavoriteRepository<'_> {
    pub async fn find(&self, user_id: i32, target: Target) -> AppResult<Option<Favorite>> {
        favorite_repository::find_favorite(self.txn, user_id, target).await
    }

    pub async fn create(&self, user_id: i32, target: Target) -> AppResult<Favorite> {
        favorite_repository::insert_favorite(self.txn, user_id, target).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        favorite_repository::delete_favorite(self.txn, id).await
    }
}

/// Transaction-aware comment repository.
pub struct TxCommentRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxCommentRepository<'_> {
    pub async fn create(
        &self,
        user_id: i32,
        target: Target,
        comment_text: String,
    ) -> AppResult<Comment> {
        comment_repository::insert_comment(self.txn, user_id, target, comment_text).await
    }
}
