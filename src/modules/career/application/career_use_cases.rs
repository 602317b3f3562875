use std::sync::Arc;

use crate::career::application::ports::incoming::use_cases::{
    CreateCareerUseCase, GetCareersUseCase, RecommendCareersUseCase,
};

/// Career use cases reachable over HTTP. Seeding is driven from the CLI only.
#[derive(Clone)]
pub struct CareerUseCases {
    pub recommend: Arc<dyn RecommendCareersUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetCareersUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCareerUseCase + Send + Sync>,
}
