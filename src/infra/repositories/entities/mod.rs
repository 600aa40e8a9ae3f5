//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod character;
pub mod comment;
pub mod favorite;
pub mod planet;
pub mod starship;
pub mod user;
