//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    CatalogService, CommentService, FavoriteService, ServiceContainer, Services, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Characters, planets and starships
    pub catalog_service: Arc<dyn CatalogService>,
    /// Favorite service
    pub favorite_service: Arc<dyn FavoriteService>,
    /// Comment service
    pub comment_service: Arc<dyn CommentService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database connection.
    ///
    /// Wires every service through the ServiceContainer over one shared
    /// UnitOfWork.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::from_container(&container, database)
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            user_service: container.users(),
            catalog_service: container.catalog(),
            favorite_service: container.favorites(),
            comment_service: container.comments(),
            database,
        }
    }
}
