//! Favorite/comment targets.
//!
//! A favorite or comment points at exactly one catalog record. The store keeps
//! three nullable columns; the domain keeps a single tagged id so a row with
//! zero or several targets cannot be represented.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Character,
    Planet,
    Starship,
}

impl TargetKind {
    /// Capitalized name used in response messages ("Planet already a favorite").
    pub fn label(&self) -> &'static str {
        match self {
            TargetKind::Character => "Character",
            TargetKind::Planet => "Planet",
            TargetKind::Starship => "Starship",
        }
    }

    /// Lowercase name used for favorites ("Favorite people not found").
    pub fn favorite_noun(&self) -> &'static str {
        match self {
            TargetKind::Character => "people",
            TargetKind::Planet => "planet",
            TargetKind::Starship => "starship",
        }
    }

    pub fn not_found_message(&self) -> String {
        match self {
            TargetKind::Character => "Person not found".to_string(),
            other => format!("{} not found", other.label()),
        }
    }

    pub fn favorite_exists_message(&self) -> String {
        format!("{} already a favorite", self.label())
    }

    pub fn favorite_added_message(&self) -> String {
        format!("{} added to favorites", self.label())
    }

    pub fn favorite_not_found_message(&self) -> String {
        format!("Favorite {} not found", self.favorite_noun())
    }

    pub fn favorite_deleted_message(&self) -> String {
        format!("Favorite {} deleted successfully", self.favorite_noun())
    }

    pub fn comment_added_message(&self) -> String {
        format!("Comment added to {}", self.label().to_lowercase())
    }

    pub fn missing_reference_message(&self) -> String {
        format!("User or {} not found", self.label().to_lowercase())
    }

    pub fn deleted_message(&self) -> String {
        format!("{} deleted successfully", self.label())
    }

    pub fn still_referenced_message(&self) -> String {
        format!("{} is still referenced by favorites or comments", self.label())
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.favorite_noun())
    }
}

/// The single catalog record a favorite or comment refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Character(i32),
    Planet(i32),
    Starship(i32),
}

impl Target {
    pub fn new(kind: TargetKind, id: i32) -> Self {
        match kind {
            TargetKind::Character => Target::Character(id),
            TargetKind::Planet => Target::Planet(id),
            TargetKind::Starship => Target::Starship(id),
        }
    }

    pub fn kind(&self) -> TargetKind {
        match self {
            Target::Character(_) => TargetKind::Character,
            Target::Planet(_) => TargetKind::Planet,
            Target::Starship(_) => TargetKind::Starship,
        }
    }

    pub fn id(&self) -> i32 {
        match *self {
            Target::Character(id) | Target::Planet(id) | Target::Starship(id) => id,
        }
    }

    /// Rebuild a target from the three storage columns.
    ///
    /// Returns `None` unless exactly one column is set.
    pub fn from_columns(
        character_id: Option<i32>,
        planet_id: Option<i32>,
        starship_id: Option<i32>,
    ) -> Option<Self> {
        match (character_id, planet_id, starship_id) {
            (Some(id), None, None) => Some(Target::Character(id)),
            (None, Some(id), None) => Some(Target::Planet(id)),
            (None, None, Some(id)) => Some(Target::Starship(id)),
            _ => None,
        }
    }

    /// Split into storage columns; exactly one is `Some`.
    pub fn columns(&self) -> TargetColumns {
        let mut columns = TargetColumns::default();
        match *self {
            Target::Character(id) => columns.character_id = Some(id),
            Target::Planet(id) => columns.planet_id = Some(id),
            Target::Starship(id) => columns.starship_id = Some(id),
        }
        columns
    }
}

/// External (and storage) shape of a target: only the populated id is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct TargetColumns {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub character_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starship_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns_requires_exactly_one() {
        assert_eq!(Target::from_columns(None, Some(3), None), Some(Target::Planet(3)));
        assert_eq!(Target::from_columns(None, None, None), None);
        assert_eq!(Target::from_columns(Some(1), Some(3), None), None);
        assert_eq!(Target::from_columns(Some(1), Some(2), Some(3)), None);
    }

    #[test]
    fn test_columns_populates_only_the_target() {
        let columns = Target::Starship(9).columns();
        assert_eq!(columns.character_id, None);
        assert_eq!(columns.planet_id, None);
        assert_eq!(columns.starship_id, Some(9));

        let back = Target::from_columns(columns.character_id, columns.planet_id, columns.starship_id);
        assert_eq!(back, Some(Target::Starship(9)));
    }

    #[test]
    fn test_serialized_columns_omit_unset_ids() {
        let json = serde_json::to_value(Target::Character(4).columns()).unwrap();
        assert_eq!(json, serde_json::json!({ "character_id": 4 }));
    }

    #[test]
    fn test_messages() {
        assert_eq!(TargetKind::Character.not_found_message(), "Person not found");
        assert_eq!(TargetKind::Planet.not_found_message(), "Planet not found");
        assert_eq!(TargetKind::Planet.favorite_exists_message(), "Planet already a favorite");
        assert_eq!(TargetKind::Character.favorite_not_found_message(), "Favorite people not found");
        assert_eq!(TargetKind::Starship.comment_added_message(), "Comment added to starship");
        assert_eq!(TargetKind::Character.comment_added_message(), "Comment added to character");
    }
}
