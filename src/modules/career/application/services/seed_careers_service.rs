use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::career::application::{
    domain::entities::NewCareer,
    ports::{
        incoming::use_cases::{SeedCareersError, SeedCareersUseCase},
        outgoing::{CareerQuery, CareerRepository},
    },
};
use crate::shared::snapshot::SnapshotWriter;

const COLLECTION: &str = "careers";

pub struct SeedCareersService<Q, R, S>
where
    Q: CareerQuery + Send + Sync,
    R: CareerRepository + Send + Sync,
    S: SnapshotWriter + Send + Sync,
{
    query: Q,
    repository: R,
    snapshot: S,
}

impl<Q, R, S> SeedCareersService<Q, R, S>
where
    Q: CareerQuery + Send + Sync,
    R: CareerRepository + Send + Sync,
    S: SnapshotWriter + Send + Sync,
{
    pub fn new(query: Q, repository: R, snapshot: S) -> Self {
        Self {
            query,
            repository,
            snapshot,
        }
    }
}

#[async_trait]
impl<Q, R, S> SeedCareersUseCase for SeedCareersService<Q, R, S>
where
    Q: CareerQuery + Send + Sync,
    R: CareerRepository + Send + Sync,
    S: SnapshotWriter + Send + Sync,
{
    async fn backup(&self) -> Result<Option<PathBuf>, SeedCareersError> {
        let existing = self
            .query
            .fetch_all()
            .await
            .map_err(|e| SeedCareersError::StoreUnavailable(e.to_string()))?;

        if existing.is_empty() {
            warn!(collection = COLLECTION, "No existing data, skipping backup");
            return Ok(None);
        }

        let records = serde_json::to_value(&existing)
            .map_err(|e| SeedCareersError::SnapshotFailed(e.to_string()))?;

        let path = self
            .snapshot
            .write(COLLECTION, records)
            .await
            .map_err(|e| SeedCareersError::SnapshotFailed(e.to_string()))?;

        info!(
            collection = COLLECTION,
            count = existing.len(),
            path = %path.display(),
            "Backed up existing careers"
        );
        Ok(Some(path))
    }

    async fn replace(&self, careers: Vec<NewCareer>) -> Result<u64, SeedCareersError> {
        let inserted = self
            .repository
            .replace_all(careers)
            .await
            .map_err(|e| SeedCareersError::StoreUnavailable(e.to_string()))?;

        info!(collection = COLLECTION, inserted, "Careers reseeded");
        Ok(inserted)
    }
}
