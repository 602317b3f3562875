use async_trait::async_trait;

use crate::career::application::{
    domain::entities::{CareerRecord, NewCareer},
    ports::{
        incoming::use_cases::{CreateCareerError, CreateCareerUseCase},
        outgoing::CareerRepository,
    },
};

#[derive(Debug, Clone)]
pub struct CreateCareerService<R>
where
    R: CareerRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCareerService<R>
where
    R: CareerRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCareerUseCase for CreateCareerService<R>
where
    R: CareerRepository + Send + Sync,
{
    async fn execute(&self, career: NewCareer) -> Result<CareerRecord, CreateCareerError> {
        self.repository
            .insert(career)
            .await
            .map_err(|e| CreateCareerError::RepositoryError(e.to_string()))
    }
}
