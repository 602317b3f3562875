use async_trait::async_trait;

use crate::catalog::application::domain::entities::Designation;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDesignationsError {
    #[error("Failed to fetch designations: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetDesignationsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Designation>, GetDesignationsError>;
}
