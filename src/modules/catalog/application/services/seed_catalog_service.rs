use async_trait::async_trait;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::catalog::application::{
    domain::entities::CatalogCounts,
    ports::{
        incoming::use_cases::{CatalogBackups, SeedCatalogError, SeedCatalogUseCase},
        outgoing::{CatalogQuery, CatalogRepository},
    },
};
use crate::shared::snapshot::SnapshotWriter;

pub struct SeedCatalogService<Q, R, S>
where
    Q: CatalogQuery + Send + Sync,
    R: CatalogRepository + Send + Sync,
    S: SnapshotWriter + Send + Sync,
{
    query: Q,
    repository: R,
    snapshot: S,
}

impl<Q, R, S> SeedCatalogService<Q, R, S>
where
    Q: CatalogQuery + Send + Sync,
    R: CatalogRepository + Send + Sync,
    S: SnapshotWriter + Send + Sync,
{
    pub fn new(query: Q, repository: R, snapshot: S) -> Self {
        Self {
            query,
            repository,
            snapshot,
        }
    }

    async fn write_backup<T: Serialize + Sync>(
        &self,
        collection: &str,
        rows: &[T],
    ) -> Result<Option<PathBuf>, SeedCatalogError> {
        if rows.is_empty() {
            warn!(collection, "No existing data, skipping backup");
            return Ok(None);
        }

        let records = serde_json::to_value(rows)
            .map_err(|e| SeedCatalogError::SnapshotFailed(e.to_string()))?;

        let path = self
            .snapshot
            .write(collection, records)
            .await
            .map_err(|e| SeedCatalogError::SnapshotFailed(e.to_string()))?;

        info!(collection, count = rows.len(), path = %path.display(), "Backup created");
        Ok(Some(path))
    }
}

#[async_trait]
impl<Q, R, S> SeedCatalogUseCase for SeedCatalogService<Q, R, S>
where
    Q: CatalogQuery + Send + Sync,
    R: CatalogRepository + Send + Sync,
    S: SnapshotWriter + Send + Sync,
{
    async fn backup(&self) -> Result<CatalogBackups, SeedCatalogError> {
        let existing_languages = self
            .query
            .fetch_languages()
            .await
            .map_err(|e| SeedCatalogError::StoreUnavailable(e.to_string()))?;
        let existing_designations = self
            .query
            .fetch_designations()
            .await
            .map_err(|e| SeedCatalogError::StoreUnavailable(e.to_string()))?;

        Ok(CatalogBackups {
            languages: self.write_backup("languages", &existing_languages).await?,
            designations: self
                .write_backup("designations", &existing_designations)
                .await?,
        })
    }

    async fn replace(
        &self,
        languages: Vec<String>,
        designations: Vec<String>,
    ) -> Result<CatalogCounts, SeedCatalogError> {
        let inserted = self
            .repository
            .replace_all(languages, designations)
            .await
            .map_err(|e| SeedCatalogError::StoreUnavailable(e.to_string()))?;

        info!(
            languages = inserted.languages,
            designations = inserted.designations,
            "Catalog reseeded"
        );
        Ok(inserted)
    }
}
