//! Service Container - Centralized service access.

use std::sync::Arc;

use super::{CatalogService, CommentService, FavoriteService, UserService};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get catalog service (characters, planets, starships)
    fn catalog(&self) -> Arc<dyn CatalogService>;

    /// Get favorite service
    fn favorites(&self) -> Arc<dyn FavoriteService>;

    /// Get comment service
    fn comments(&self) -> Arc<dyn CommentService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
    catalog_service: Arc<dyn CatalogService>,
    favorite_service: Arc<dyn FavoriteService>,
    comment_service: Arc<dyn CommentService>,
}

impl Services {
    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        use super::{CatalogManager, CommentManager, FavoriteManager, UserManager};

        let uow = Arc::new(Persistence::new(db));

        Self {
            user_service: Arc::new(UserManager::new(uow.clone())),
            catalog_service: Arc::new(CatalogManager::new(uow.clone())),
            favorite_service: Arc::new(FavoriteManager::new(uow.clone())),
            comment_service: Arc::new(CommentManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }

    fn favorites(&self) -> Arc<dyn FavoriteService> {
        self.favorite_service.clone()
    }

    fn comments(&self) -> Arc<dyn CommentService> {
        self.comment_service.clone()
    }
}
