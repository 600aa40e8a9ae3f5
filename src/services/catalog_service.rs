//! Catalog service - characters, planets and starships.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CatalogDraft, CatalogEntry, TargetKind};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// All records of one kind; an empty catalog is a valid answer.
    async fn list(&self, kind: TargetKind) -> AppResult<Vec<CatalogEntry>>;

    /// One record, or `NotFound` with the kind's message.
    async fn get(&self, kind: TargetKind, id: i32) -> AppResult<CatalogEntry>;

    async fn create(&self, draft: CatalogDraft) -> AppResult<CatalogEntry>;

    /// Overwrite every attribute of an existing record.
    async fn update(&self, id: i32, draft: CatalogDraft) -> AppResult<CatalogEntry>;

    /// Remove a record that no favorite or comment refers to.
    async fn delete(&self, kind: TargetKind, id: i32) -> AppResult<()>;

    /// Insert many records in a single transaction. Returns how many were stored.
    async fn import(&self, drafts: Vec<CatalogDraft>) -> AppResult<usize>;
}

/// Concrete implementation of CatalogService using Unit of Work.
pub struct CatalogManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CatalogManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CatalogService for CatalogManager<U> {
    async fn list(&self, kind: TargetKind) -> AppResult<Vec<CatalogEntry>> {
        self.uow.catalog().list(kind).await
    }

    async fn get(&self, kind: TargetKind, id: i32) -> AppResult<CatalogEntry> {
        self.uow
            .catalog()
            .find_by_id(kind, id)
            .await?
            .ok_or_not_found(kind.not_found_message())
    }

    async fn create(&self, draft: CatalogDraft) -> AppResult<CatalogEntry> {
        let entry = self
            .uow
            .transaction(move |ctx| Box::pin(async move { ctx.catalog().create(draft).await }))
            .await?;

        tracing::info!(kind = %entry.kind(), id = entry.id(), "Catalog record created");
        Ok(entry)
    }

    async fn update(&self, id: i32, draft: CatalogDraft) -> AppResult<CatalogEntry> {
        let kind = draft.kind();
        self.uow
            .transaction(move |ctx| {
                Box::pin(async move { ctx.catalog().update(id, draft).await })
            })
            .await?
            .ok_or_not_found(kind.not_found_message())
    }

    async fn delete(&self, kind: TargetKind, id: i32) -> AppResult<()> {
        let deleted = self
            .uow
            .transaction(move |ctx| Box::pin(async move { ctx.catalog().delete(kind, id).await }))
            .await?;

        if !deleted {
            return Err(AppError::not_found(kind.not_found_message()));
        }

        tracing::info!(kind = %kind, id, "Catalog record deleted");
        Ok(())
    }

    async fn import(&self, drafts: Vec<CatalogDraft>) -> AppResult<usize> {
        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let catalog = ctx.catalog();
                    let mut stored: usize = 0;
                    for draft in drafts {
                        catalog.create(draft).await?;
                        stored += 1;
                    }
                    Ok(stored)
                })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Character, Planet};
    use crate::infra::MockCatalogRepository;
    use crate::services::test_support::TestUnitOfWork;
    use mockall::predicate::eq;

    fn service(repo: MockCatalogRepository) -> CatalogManager<TestUnitOfWork> {
        CatalogManager::new(Arc::new(TestUnitOfWork::default().with_catalog(repo)))
    }

    fn luke() -> CatalogEntry {
        CatalogEntry::Character(Character {
            id: 1,
            name: Some("Luke Skywalker".to_string()),
            age: Some(19),
            height: Some(172),
            eye_color: Some("blue".to_string()),
        })
    }

    #[tokio::test]
    async fn test_get_returns_matching_record() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_by_id()
            .with(eq(TargetKind::Character), eq(1))
            .returning(|_, _| Ok(Some(luke())));

        let entry = service(repo).get(TargetKind::Character, 1).await.unwrap();
        assert_eq!(entry.id(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_person() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_by_id().returning(|_, _| Ok(None));

        let err = service(repo).get(TargetKind::Character, 42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Person not found"));
    }

    #[tokio::test]
    async fn test_get_missing_planet() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_by_id().returning(|_, _| Ok(None));

        let err = service(repo).get(TargetKind::Planet, 42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Planet not found"));
    }

    #[tokio::test]
    async fn test_list_may_be_empty() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_list()
            .with(eq(TargetKind::Starship))
            .returning(|_| Ok(vec![]));

        let entries = service(repo).list(TargetKind::Starship).await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_list_passes_records_through() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_list().returning(|_| {
            Ok(vec![CatalogEntry::Planet(Planet {
                id: 3,
                diameter: None,
                gravity: None,
                population: None,
                climate: Some("frozen".to_string()),
            })])
        });

        let entries = service(repo).list(TargetKind::Planet).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind(), TargetKind::Planet);
    }
}
