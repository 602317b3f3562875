use async_trait::async_trait;

use crate::career::application::domain::entities::{CareerRecord, NewCareer};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CareerRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CareerRepository: Send + Sync {
    async fn insert(&self, career: NewCareer) -> Result<CareerRecord, CareerRepositoryError>;

    /// Deletes every career and inserts `careers` in a single transaction.
    /// Returns the number of inserted rows.
    async fn replace_all(&self, careers: Vec<NewCareer>) -> Result<u64, CareerRepositoryError>;
}
