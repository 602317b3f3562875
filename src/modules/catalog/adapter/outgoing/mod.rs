pub mod sea_orm_entity;
mod catalog_query_postgres;
mod catalog_repository_postgres;

pub use catalog_query_postgres::CatalogQueryPostgres;
pub use catalog_repository_postgres::CatalogRepositoryPostgres;
