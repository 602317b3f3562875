use async_trait::async_trait;

use crate::catalog::application::{
    domain::entities::Language,
    ports::{
        incoming::use_cases::{GetLanguagesError, GetLanguagesUseCase},
        outgoing::CatalogQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetLanguagesService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetLanguagesService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetLanguagesUseCase for GetLanguagesService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Language>, GetLanguagesError> {
        self.query
            .fetch_languages()
            .await
            .map_err(|e| GetLanguagesError::QueryFailed(e.to_string()))
    }
}
