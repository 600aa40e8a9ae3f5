//! Seed command - Loads the catalog from a JSON file.
//!
//! The file holds three arrays keyed by collection name:
//!
//! ```json
//! { "people": [{ "name": "Luke Skywalker", ... }], "planets": [...], "starships": [...] }
//! ```

use serde::Deserialize;
use validator::Validate;

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::domain::{CatalogDraft, CharacterDraft, PlanetDraft, StarshipDraft};
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::{ServiceContainer, Services};

/// Contents of a seed file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub people: Vec<CharacterDraft>,
    pub planets: Vec<PlanetDraft>,
    pub starships: Vec<StarshipDraft>,
}

impl SeedData {
    /// Parse and validate a seed document.
    pub fn parse(json: &str) -> AppResult<Self> {
        let data: SeedData = serde_json::from_str(json)
            .map_err(|e| AppError::validation(format!("Invalid seed file: {}", e)))?;

        let invalid = data
            .people
            .iter()
            .map(Validate::validate)
            .chain(data.planets.iter().map(Validate::validate))
            .chain(data.starships.iter().map(Validate::validate))
            .find_map(Result::err);
        if let Some(errors) = invalid {
            return Err(AppError::validation(format!("Invalid seed record: {}", errors)));
        }

        Ok(data)
    }

    /// All records in insertion order.
    pub fn into_drafts(self) -> Vec<CatalogDraft> {
        self.people
            .into_iter()
            .map(CatalogDraft::from)
            .chain(self.planets.into_iter().map(CatalogDraft::from))
            .chain(self.starships.into_iter().map(CatalogDraft::from))
            .collect()
    }
}

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let json = std::fs::read_to_string(&args.file)
        .map_err(|e| AppError::internal(format!("Failed to read {}: {}", args.file, e)))?;
    let data = SeedData::parse(&json)?;
    tracing::info!(
        people = data.people.len(),
        planets = data.planets.len(),
        starships = data.starships.len(),
        "Seed file loaded from {}",
        args.file
    );

    let db = Database::connect(&config.database_url).await?;
    let services = Services::from_connection(db.get_connection());

    let stored = services.catalog().import(data.into_drafts()).await?;
    tracing::info!("Seeded {} catalog records", stored);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TargetKind;

    #[test]
    fn test_parse_orders_drafts_by_collection() {
        let data = SeedData::parse(
            r#"{
                "planets": [{ "climate": "arid" }],
                "people": [{ "name": "Luke Skywalker" }, { "name": "Leia Organa" }]
            }"#,
        )
        .unwrap();

        let kinds: Vec<_> = data.into_drafts().iter().map(CatalogDraft::kind).collect();
        assert_eq!(
            kinds,
            vec![TargetKind::Character, TargetKind::Character, TargetKind::Planet]
        );
    }

    #[test]
    fn test_parse_rejects_invalid_record() {
        let err = SeedData::parse(r#"{ "starships": [{ "crew": -4 }] }"#).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_bundled_seed_file_is_valid() {
        let json = include_str!("../../data/seed.json");
        let data = SeedData::parse(json).unwrap();
        assert!(!data.people.is_empty());
        assert!(!data.planets.is_empty());
        assert!(!data.starships.is_empty());
    }
}
