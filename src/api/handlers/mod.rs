//! HTTP request handlers.

pub mod catalog_handler;
pub mod comment_handler;
pub mod favorite_handler;
pub mod user_handler;

pub use catalog_handler::catalog_routes;
pub use comment_handler::comment_routes;
pub use favorite_handler::favorite_routes;
pub use user_handler::user_routes;
