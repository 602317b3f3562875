mod catalog_query;
mod catalog_repository;

pub use catalog_query::{CatalogQuery, CatalogQueryError};
pub use catalog_repository::{CatalogRepository, CatalogRepositoryError};
