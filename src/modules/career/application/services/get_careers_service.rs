use async_trait::async_trait;

use crate::career::application::{
    domain::entities::CareerRecord,
    ports::{
        incoming::use_cases::{GetCareersError, GetCareersUseCase},
        outgoing::CareerQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetCareersService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCareersService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCareersUseCase for GetCareersService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CareerRecord>, GetCareersError> {
        self.query
            .fetch_all()
            .await
            .map_err(|e| GetCareersError::QueryFailed(e.to_string()))
    }
}
