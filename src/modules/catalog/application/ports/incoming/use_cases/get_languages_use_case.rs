use async_trait::async_trait;

use crate::catalog::application::domain::entities::Language;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetLanguagesError {
    #[error("Failed to fetch languages: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetLanguagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Language>, GetLanguagesError>;
}
