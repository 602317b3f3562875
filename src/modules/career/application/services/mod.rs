mod create_career_service;
mod get_careers_service;
mod recommend_careers_service;
mod seed_careers_service;

pub use create_career_service::CreateCareerService;
pub use get_careers_service::GetCareersService;
pub use recommend_careers_service::RecommendCareersService;
pub use seed_careers_service::SeedCareersService;
