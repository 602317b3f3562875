use async_trait::async_trait;

use crate::catalog::application::domain::entities::{Designation, Language};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CatalogQuery: Send + Sync {
    /// Ordered by name.
    async fn fetch_languages(&self) -> Result<Vec<Language>, CatalogQueryError>;

    /// Ordered by title.
    async fn fetch_designations(&self) -> Result<Vec<Designation>, CatalogQueryError>;
}
