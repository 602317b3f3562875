use async_trait::async_trait;
use std::path::PathBuf;

use crate::catalog::application::domain::entities::CatalogCounts;

/// Where the previous tables were saved; `None` for a table that was empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogBackups {
    pub languages: Option<PathBuf>,
    pub designations: Option<PathBuf>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedCatalogError {
    #[error("Catalog store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Backup failed, nothing was changed: {0}")]
    SnapshotFailed(String),
}

#[async_trait]
pub trait SeedCatalogUseCase: Send + Sync {
    async fn backup(&self) -> Result<CatalogBackups, SeedCatalogError>;

    async fn replace(
        &self,
        languages: Vec<String>,
        designations: Vec<String>,
    ) -> Result<CatalogCounts, SeedCatalogError>;
}
