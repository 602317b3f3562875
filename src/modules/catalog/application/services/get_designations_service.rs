use async_trait::async_trait;

use crate::catalog::application::{
    domain::entities::Designation,
    ports::{
        incoming::use_cases::{GetDesignationsError, GetDesignationsUseCase},
        outgoing::CatalogQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetDesignationsService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetDesignationsService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetDesignationsUseCase for GetDesignationsService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Designation>, GetDesignationsError> {
        self.query
            .fetch_designations()
            .await
            .map_err(|e| GetDesignationsError::QueryFailed(e.to_string()))
    }
}
