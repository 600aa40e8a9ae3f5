//! Favorite: a user marking one catalog record.

use serde::Serialize;
use utoipa::ToSchema;

use super::{Target, TargetColumns};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub target: Target,
}

/// External representation: id, user_id and the one populated target id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FavoriteResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub user_id: i32,
    #[serde(flatten)]
    pub target: TargetColumns,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            target: favorite.target.columns(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_serializes_single_target() {
        let favorite = Favorite {
            id: 3,
            user_id: 1,
            target: Target::Planet(5),
        };

        let json = serde_json::to_value(FavoriteResponse::from(favorite)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 3, "user_id": 1, "planet_id": 5 }));
    }
}
