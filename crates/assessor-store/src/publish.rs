//! Two-phase publish toggle for the admin dashboard.
//!
//! The dashboard flips the published flag locally first so the UI responds
//! immediately, then persists. If persistence fails the command compensates
//! by reapplying the inverse flip, leaving the local rows as they were.

use assessor_core::catalog::FormationSummary;

use crate::error::StoreError;
use crate::repository::CatalogRepository;

/// One publish/unpublish toggle for a single formation.
pub struct PublishToggle {
    formation_id: u32,
}

impl PublishToggle {
    pub fn new(formation_id: u32) -> Self {
        Self { formation_id }
    }

    /// Phase one: flip the flag in the caller's local rows.
    ///
    /// Returns the new flag value, or `None` when the formation is not in
    /// the rows (in which case there is nothing to persist or undo).
    pub fn apply(&self, rows: &mut [FormationSummary]) -> Option<bool> {
        let row = rows.iter_mut().find(|r| r.id == self.formation_id)?;
        row.published = !row.published;
        Some(row.published)
    }

    /// Inverse of `apply`, used when persistence fails.
    pub fn compensate(&self, rows: &mut [FormationSummary]) {
        if let Some(row) = rows.iter_mut().find(|r| r.id == self.formation_id) {
            row.published = !row.published;
        }
    }

    /// Phase two: persist the flipped flag through the repository.
    pub async fn commit(
        &self,
        catalog: &dyn CatalogRepository,
        published: bool,
    ) -> Result<(), StoreError> {
        let mut formation = catalog
            .get(self.formation_id)
            .await?
            .ok_or(StoreError::FormationNotFound(self.formation_id))?;
        formation.published = published;
        catalog.save(formation).await?;
        Ok(())
    }
}

/// Toggle publication: apply locally, persist, compensate on failure.
///
/// Returns the flag now shown in `rows`; on persistence failure the rows are
/// rolled back and the error is returned.
pub async fn toggle_publication(
    rows: &mut [FormationSummary],
    catalog: &dyn CatalogRepository,
    formation_id: u32,
) -> Result<bool, StoreError> {
    let command = PublishToggle::new(formation_id);
    let Some(published) = command.apply(rows) else {
        return Err(StoreError::FormationNotFound(formation_id));
    };

    match command.commit(catalog, published).await {
        Ok(()) => Ok(published),
        Err(e) => {
            tracing::warn!(formation_id, error = %e, "publish toggle failed; rolling back");
            command.compensate(rows);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::service::dashboard_rows;
    use assessor_core::catalog::{Formation, FormationKpis};
    use async_trait::async_trait;
    use chrono::Utc;

    /// Catalog that accepts reads but fails every write.
    struct ReadOnlyCatalog(MemoryStore);

    #[async_trait]
    impl CatalogRepository for ReadOnlyCatalog {
        async fn get(&self, id: u32) -> Result<Option<Formation>, StoreError> {
            CatalogRepository::get(&self.0, id).await
        }

        async fn list(&self) -> Result<Vec<Formation>, StoreError> {
            CatalogRepository::list(&self.0).await
        }

        async fn save(&self, _formation: Formation) -> Result<Formation, StoreError> {
            Err(StoreError::Backend("write refused".into()))
        }

        async fn delete(&self, _id: u32) -> Result<(), StoreError> {
            Err(StoreError::Backend("write refused".into()))
        }

        async fn kpis(&self, id: u32) -> Result<FormationKpis, StoreError> {
            self.0.kpis(id).await
        }
    }

    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        CatalogRepository::save(&store, Formation::draft("Rust Basics", Utc::now()))
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn toggle_persists_and_updates_rows() {
        let store = seeded_store().await;
        let mut rows = dashboard_rows(&store).await.unwrap();
        assert!(!rows[0].published);

        let published = toggle_publication(&mut rows, &store, 1).await.unwrap();
        assert!(published);
        assert!(rows[0].published);

        let stored = CatalogRepository::get(&store, 1).await.unwrap().unwrap();
        assert!(stored.published);

        // Toggling again flips back.
        let published = toggle_publication(&mut rows, &store, 1).await.unwrap();
        assert!(!published);
        assert!(!CatalogRepository::get(&store, 1).await.unwrap().unwrap().published);
    }

    #[tokio::test]
    async fn failed_persist_rolls_the_rows_back() {
        let catalog = ReadOnlyCatalog(seeded_store().await);
        let mut rows = dashboard_rows(&catalog.0).await.unwrap();

        let err = toggle_publication(&mut rows, &catalog, 1).await.unwrap_err();
        assert!(matches!(err, StoreError::Backend(_)));
        assert!(!rows[0].published, "rollback must restore the local flag");

        let stored = CatalogRepository::get(&catalog.0, 1).await.unwrap().unwrap();
        assert!(!stored.published);
    }

    #[tokio::test]
    async fn unknown_formation_is_reported_without_touching_rows() {
        let store = seeded_store().await;
        let mut rows = dashboard_rows(&store).await.unwrap();
        let snapshot = rows.clone();

        let err = toggle_publication(&mut rows, &store, 99).await.unwrap_err();
        assert!(matches!(err, StoreError::FormationNotFound(99)));
        assert_eq!(rows, snapshot);
    }
}
