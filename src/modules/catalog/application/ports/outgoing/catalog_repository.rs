use async_trait::async_trait;

use crate::catalog::application::domain::entities::CatalogCounts;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Clears both tables and inserts the given names and titles in one
    /// transaction. Duplicates are stored as given.
    async fn replace_all(
        &self,
        languages: Vec<String>,
        designations: Vec<String>,
    ) -> Result<CatalogCounts, CatalogRepositoryError>;
}
