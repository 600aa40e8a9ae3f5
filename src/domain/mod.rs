//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod catalog;
pub mod comment;
pub mod favorite;
pub mod password;
pub mod target;
pub mod user;

pub use catalog::{
    CatalogDraft, CatalogEntry, Character, CharacterDraft, Planet, PlanetDraft, Starship,
    StarshipDraft,
};
pub use comment::{Comment, CommentResponse};
pub use favorite::{Favorite, FavoriteResponse};
pub use password::Password;
pub use target::{Target, TargetColumns, TargetKind};
pub use user::{CreateUser, User, UserResponse};
