//! Catalog records: characters, planets and starships.
//!
//! These are the things users favorite and comment on. Every attribute
//! except the id is optional, matching the columns they are stored in.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::TargetKind;

/// A character ("people" in the routes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Character {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Luke Skywalker")]
    pub name: Option<String>,
    #[schema(example = 19)]
    pub age: Option<i32>,
    #[schema(example = 172)]
    pub height: Option<i32>,
    #[schema(example = "blue")]
    pub eye_color: Option<String>,
}

/// A planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Planet {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 10465)]
    pub diameter: Option<i32>,
    #[schema(example = 1)]
    pub gravity: Option<i32>,
    #[schema(example = 200000)]
    pub population: Option<i64>,
    #[schema(example = "arid")]
    pub climate: Option<String>,
}

/// A starship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Starship {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "T-65 X-wing")]
    pub model: Option<String>,
    #[schema(example = "Starfighter")]
    pub starship_class: Option<String>,
    #[schema(example = 1)]
    pub crew: Option<i32>,
    #[schema(example = 0)]
    pub passengers: Option<i32>,
}

/// Any catalog record. Serializes as the bare record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CatalogEntry {
    Character(Character),
    Planet(Planet),
    Starship(Starship),
}

impl CatalogEntry {
    pub fn id(&self) -> i32 {
        match self {
            CatalogEntry::Character(c) => c.id,
            CatalogEntry::Planet(p) => p.id,
            CatalogEntry::Starship(s) => s.id,
        }
    }

    pub fn kind(&self) -> TargetKind {
        match self {
            CatalogEntry::Character(_) => TargetKind::Character,
            CatalogEntry::Planet(_) => TargetKind::Planet,
            CatalogEntry::Starship(_) => TargetKind::Starship,
        }
    }
}

/// Character attributes for create/update requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CharacterDraft {
    #[validate(length(max = 250, message = "Name must be at most 250 characters"))]
    #[schema(example = "Leia Organa")]
    pub name: Option<String>,
    #[validate(range(min = 0, message = "Age cannot be negative"))]
    #[schema(example = 19)]
    pub age: Option<i32>,
    #[validate(range(min = 0, message = "Height cannot be negative"))]
    #[schema(example = 150)]
    pub height: Option<i32>,
    #[validate(length(max = 50, message = "Eye color must be at most 50 characters"))]
    #[schema(example = "brown")]
    pub eye_color: Option<String>,
}

/// Planet attributes for create/update requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct PlanetDraft {
    #[validate(range(min = 0, message = "Diameter cannot be negative"))]
    #[schema(example = 12500)]
    pub diameter: Option<i32>,
    #[validate(range(min = 0, message = "Gravity cannot be negative"))]
    #[schema(example = 1)]
    pub gravity: Option<i32>,
    #[validate(range(min = 0, message = "Population cannot be negative"))]
    #[schema(example = 2000000000)]
    pub population: Option<i64>,
    #[validate(length(max = 250, message = "Climate must be at most 250 characters"))]
    #[schema(example = "temperate")]
    pub climate: Option<String>,
}

/// Starship attributes for create/update requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct StarshipDraft {
    #[validate(length(max = 250, message = "Model must be at most 250 characters"))]
    #[schema(example = "YT-1300 light freighter")]
    pub model: Option<String>,
    #[validate(length(max = 250, message = "Starship class must be at most 250 characters"))]
    #[schema(example = "Light freighter")]
    pub starship_class: Option<String>,
    #[validate(range(min = 0, message = "Crew cannot be negative"))]
    #[schema(example = 4)]
    pub crew: Option<i32>,
    #[validate(range(min = 0, message = "Passengers cannot be negative"))]
    #[schema(example = 6)]
    pub passengers: Option<i32>,
}

/// Attributes for any catalog record
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogDraft {
    Character(CharacterDraft),
    Planet(PlanetDraft),
    Starship(StarshipDraft),
}

impl CatalogDraft {
    pub fn kind(&self) -> TargetKind {
        match self {
            CatalogDraft::Character(_) => TargetKind::Character,
            CatalogDraft::Planet(_) => TargetKind::Planet,
            CatalogDraft::Starship(_) => TargetKind::Starship,
        }
    }
}

impl From<CharacterDraft> for CatalogDraft {
    fn from(draft: CharacterDraft) -> Self {
        CatalogDraft::Character(draft)
    }
}

impl From<PlanetDraft> for CatalogDraft {
    fn from(draft: PlanetDraft) -> Self {
        CatalogDraft::Planet(draft)
    }
}

impl From<StarshipDraft> for CatalogDraft {
    fn from(draft: StarshipDraft) -> Self {
        CatalogDraft::Starship(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_as_bare_record() {
        let entry = CatalogEntry::Planet(Planet {
            id: 2,
            diameter: Some(12500),
            gravity: Some(1),
            population: Some(2_000_000_000),
            climate: Some("temperate".to_string()),
        });

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 2,
                "diameter": 12500,
                "gravity": 1,
                "population": 2000000000i64,
                "climate": "temperate"
            })
        );
    }

    #[test]
    fn test_character_keeps_unset_attributes_as_null() {
        let json = serde_json::to_value(Character {
            id: 1,
            name: Some("Luke Skywalker".to_string()),
            age: None,
            height: None,
            eye_color: None,
        })
        .unwrap();

        assert_eq!(json["id"], 1);
        assert!(json["age"].is_null());
        assert!(json.get("eye_color").is_some());
    }

    #[test]
    fn test_draft_validation() {
        let draft = CharacterDraft {
            age: Some(-1),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
        assert!(CharacterDraft::default().validate().is_ok());
    }

    #[test]
    fn test_draft_kind() {
        assert_eq!(CatalogDraft::from(StarshipDraft::default()).kind(), TargetKind::Starship);
    }
}
