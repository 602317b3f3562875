use async_trait::async_trait;

use crate::career::application::domain::entities::CareerRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCareersError {
    #[error("Failed to fetch careers: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetCareersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CareerRecord>, GetCareersError>;
}
