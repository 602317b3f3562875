use async_trait::async_trait;

use crate::career::application::domain::entities::{CareerRecord, NewCareer};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCareerError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCareerUseCase: Send + Sync {
    async fn execute(&self, career: NewCareer) -> Result<CareerRecord, CreateCareerError>;
}
