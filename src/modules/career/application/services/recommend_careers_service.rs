use async_trait::async_trait;

use crate::career::application::{
    domain::matcher::{recommend, MatchError, Recommendation, SearchQuery},
    ports::{
        incoming::use_cases::{RecommendCareersError, RecommendCareersUseCase},
        outgoing::CareerQuery,
    },
};

#[derive(Debug, Clone)]
pub struct RecommendCareersService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    query: Q,
}

impl<Q> RecommendCareersService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl From<MatchError> for RecommendCareersError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::EmptyQuery => RecommendCareersError::InvalidInput,
            MatchError::Serialization(msg) => RecommendCareersError::Internal(msg),
        }
    }
}

#[async_trait]
impl<Q> RecommendCareersUseCase for RecommendCareersService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    async fn execute(&self, input: &str) -> Result<Vec<Recommendation>, RecommendCareersError> {
        // 1️⃣ Validate before touching the store
        let search = SearchQuery::parse(input)?;

        // 2️⃣ Full corpus read, single attempt
        let corpus = self
            .query
            .fetch_all()
            .await
            .map_err(|e| RecommendCareersError::StoreUnavailable(e.to_string()))?;

        // 3️⃣ Pure matching
        Ok(recommend(&search, corpus)?)
    }
}
