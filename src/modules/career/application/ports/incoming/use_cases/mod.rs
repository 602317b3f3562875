mod create_career_use_case;
mod get_careers_use_case;
mod recommend_careers_use_case;
mod seed_careers_use_case;

pub use create_career_use_case::{CreateCareerError, CreateCareerUseCase};
pub use get_careers_use_case::{GetCareersError, GetCareersUseCase};
pub use recommend_careers_use_case::{RecommendCareersError, RecommendCareersUseCase};
pub use seed_careers_use_case::{SeedCareersError, SeedCareersUseCase};
