use async_trait::async_trait;
use std::path::PathBuf;

use crate::career::application::domain::entities::NewCareer;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedCareersError {
    #[error("Career store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Backup failed, nothing was changed: {0}")]
    SnapshotFailed(String),
}

/// Reseeding runs in two phases so a caller can take every backup it needs
/// before any store is cleared.
#[async_trait]
pub trait SeedCareersUseCase: Send + Sync {
    /// Saves the current corpus. `None` when it was empty.
    async fn backup(&self) -> Result<Option<PathBuf>, SeedCareersError>;

    /// Clears the corpus and inserts `careers`, returning how many were written.
    async fn replace(&self, careers: Vec<NewCareer>) -> Result<u64, SeedCareersError>;
}
