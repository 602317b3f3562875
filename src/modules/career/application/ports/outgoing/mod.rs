mod career_query;
mod career_repository;

pub use career_query::{CareerQuery, CareerQueryError};
pub use career_repository::{CareerRepository, CareerRepositoryError};
