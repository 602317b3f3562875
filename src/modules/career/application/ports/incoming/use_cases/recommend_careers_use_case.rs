use async_trait::async_trait;

use crate::career::application::domain::matcher::Recommendation;

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecommendCareersError {
    /// Blank input. Raised before the store is touched.
    #[error("Provide 'input' field in body")]
    InvalidInput,

    #[error("Career store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Matching failed: {0}")]
    Internal(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RecommendCareersUseCase: Send + Sync {
    /// Always returns at least one element on success.
    async fn execute(&self, input: &str) -> Result<Vec<Recommendation>, RecommendCareersError>;
}
