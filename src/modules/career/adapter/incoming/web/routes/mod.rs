mod create_career;
mod get_careers;
mod recommend;

pub use create_career::{create_career_handler, __path_create_career_handler, CreateCareerRequest, CreateCareerResponse};
pub use get_careers::{get_careers_handler, __path_get_careers_handler};
pub use recommend::{recommend_handler, __path_recommend_handler, RecommendRequest};
