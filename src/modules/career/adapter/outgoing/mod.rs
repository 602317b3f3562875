pub mod sea_orm_entity;
mod career_query_postgres;
mod career_repository_postgres;

pub use career_query_postgres::CareerQueryPostgres;
pub use career_repository_postgres::CareerRepositoryPostgres;
