//! Catalog repository: characters, planets and starships.
//!
//! The three tables share one repository keyed by `TargetKind`; every
//! function dispatches to the matching SeaORM entity.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use super::entities::{character, comment, favorite, planet, starship};
use crate::domain::{CatalogDraft, CatalogEntry, Target, TargetKind};
use crate::errors::{constraint_error, AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read side of the catalog store.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All records of one kind, ordered by id
    async fn list(&self, kind: TargetKind) -> AppResult<Vec<CatalogEntry>>;

    /// Find one record by kind and id
    async fn find_by_id(&self, kind: TargetKind, id: i32) -> AppResult<Option<CatalogEntry>>;
}

/// Concrete implementation of CatalogRepository
pub struct CatalogStore {
    db: DatabaseConnection,
}

impl CatalogStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogRepository for CatalogStore {
    async fn list(&self, kind: TargetKind) -> AppResult<Vec<CatalogEntry>> {
        list_entries(&self.db, kind).await
    }

    async fn find_by_id(&self, kind: TargetKind, id: i32) -> AppResult<Option<CatalogEntry>> {
        find_entry(&self.db, kind, id).await
    }
}

pub(crate) async fn list_entries<C: ConnectionTrait>(
    db: &C,
    kind: TargetKind,
) -> AppResult<Vec<CatalogEntry>> {
    let entries = match kind {
        TargetKind::Character => character::Entity::find()
            .order_by_asc(character::Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(|m| CatalogEntry::Character(m.into()))
            .collect(),
        TargetKind::Planet => planet::Entity::find()
            .order_by_asc(planet::Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(|m| CatalogEntry::Planet(m.into()))
            .collect(),
        TargetKind::Starship => starship::Entity::find()
            .order_by_asc(starship::Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(|m| CatalogEntry::Starship(m.into()))
            .collect(),
    };

    Ok(entries)
}

pub(crate) async fn find_entry<C: ConnectionTrait>(
    db: &C,
    kind: TargetKind,
    id: i32,
) -> AppResult<Option<CatalogEntry>> {
    let entry = match kind {
        TargetKind::Character => character::Entity::find_by_id(id)
            .one(db)
            .await?
            .map(|m| CatalogEntry::Character(m.into())),
        TargetKind::Planet => planet::Entity::find_by_id(id)
            .one(db)
            .await?
            .map(|m| CatalogEntry::Planet(m.into())),
        TargetKind::Starship => starship::Entity::find_by_id(id)
            .one(db)
            .await?
            .map(|m| CatalogEntry::Starship(m.into())),
    };

    Ok(entry)
}

pub(crate) async fn insert_entry<C: ConnectionTrait>(
    db: &C,
    draft: CatalogDraft,
) -> AppResult<CatalogEntry> {
    let entry = match draft {
        CatalogDraft::Character(draft) => {
            let model = character::ActiveModel::from_draft(draft).insert(db).await?;
            CatalogEntry::Character(model.into())
        }
        CatalogDraft::Planet(draft) => {
            let model = planet::ActiveModel::from_draft(draft).insert(db).await?;
            CatalogEntry::Planet(model.into())
        }
        CatalogDraft::Starship(draft) => {
            let model = starship::ActiveModel::from_draft(draft).insert(db).await?;
            CatalogEntry::Starship(model.into())
        }
    };

    Ok(entry)
}

/// Overwrite the attributes of an existing record. `None` if the id is unknown.
pub(crate) async fn update_entry<C: ConnectionTrait>(
    db: &C,
    id: i32,
    draft: CatalogDraft,
) -> AppResult<Option<CatalogEntry>> {
    let entry = match draft {
        CatalogDraft::Character(draft) => {
            let Some(model) = character::Entity::find_by_id(id).one(db).await? else {
                return Ok(None);
            };
            let mut active = model.into_active_model();
            active.apply(draft);
            CatalogEntry::Character(active.update(db).await?.into())
        }
        CatalogDraft::Planet(draft) => {
            let Some(model) = planet::Entity::find_by_id(id).one(db).await? else {
                return Ok(None);
            };
            let mut active = model.into_active_model();
            active.apply(draft);
            CatalogEntry::Planet(active.update(db).await?.into())
        }
        CatalogDraft::Starship(draft) => {
            let Some(model) = starship::Entity::find_by_id(id).one(db).await? else {
                return Ok(None);
            };
            let mut active = model.into_active_model();
            active.apply(draft);
            CatalogEntry::Starship(active.update(db).await?.into())
        }
    };

    Ok(Some(entry))
}

/// Whether any favorite or comment points at the record.
async fn is_referenced<C: ConnectionTrait>(db: &C, target: Target) -> AppResult<bool> {
    let favorites = favorite::Entity::find()
        .filter(favorite::target_column(&target).eq(target.id()))
        .count(db)
        .await?;
    if favorites > 0 {
        return Ok(true);
    }

    let comments = comment::Entity::find()
        .filter(comment::target_column(&target).eq(target.id()))
        .count(db)
        .await?;
    Ok(comments > 0)
}

/// Delete a record. Returns whether a row was removed; records still
/// referenced by favorites or comments are refused.
pub(crate) async fn delete_entry<C: ConnectionTrait>(
    db: &C,
    kind: TargetKind,
    id: i32,
) -> AppResult<bool> {
    if is_referenced(db, Target::new(kind, id)).await? {
        return Err(AppError::conflict(kind.still_referenced_message()));
    }

    // The foreign keys still guard against a reference added concurrently
    let result = match kind {
        TargetKind::Character => character::Entity::delete_by_id(id).exec(db).await,
        TargetKind::Planet => planet::Entity::delete_by_id(id).exec(db).await,
        TargetKind::Starship => starship::Entity::delete_by_id(id).exec(db).await,
    }
    .map_err(|e| {
        constraint_error(
            e,
            || AppError::internal(format!("unexpected unique violation deleting {}", kind)),
            || AppError::conflict(kind.still_referenced_message()),
        )
    })?;

    Ok(result.rows_affected > 0)
}
