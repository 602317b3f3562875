use async_trait::async_trait;

use crate::career::application::domain::entities::CareerRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CareerQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CareerQuery: Send + Sync {
    /// Full scan of the corpus, oldest first. No filtering is pushed down.
    async fn fetch_all(&self) -> Result<Vec<CareerRecord>, CareerQueryError>;
}
