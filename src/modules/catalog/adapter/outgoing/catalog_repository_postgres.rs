use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait, Set, TransactionTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::application::{
    domain::entities::CatalogCounts,
    ports::outgoing::{CatalogRepository, CatalogRepositoryError},
};

use super::sea_orm_entity::{designations, languages};

#[derive(Debug, Clone)]
pub struct CatalogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CatalogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: impl std::fmt::Display) -> CatalogRepositoryError {
    CatalogRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryPostgres {
    async fn replace_all(
        &self,
        language_names: Vec<String>,
        designation_titles: Vec<String>,
    ) -> Result<CatalogCounts, CatalogRepositoryError> {
        let now = Utc::now().fixed_offset();

        let language_rows: Vec<languages::ActiveModel> = language_names
            .into_iter()
            .map(|name| languages::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(name),
                created_at: Set(now),
            })
            .collect();

        let designation_rows: Vec<designations::ActiveModel> = designation_titles
            .into_iter()
            .map(|title| designations::ActiveModel {
                id: Set(Uuid::new_v4()),
                title: Set(title),
                created_at: Set(now),
            })
            .collect();

        let txn = self.db.begin().await.map_err(db_error)?;

        languages::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_error)?;
        designations::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_error)?;

        let mut counts = CatalogCounts::default();

        if !language_rows.is_empty() {
            counts.languages = languages::Entity::insert_many(language_rows)
                .exec_without_returning(&txn)
                .await
                .map_err(db_error)?;
        }
        if !designation_rows.is_empty() {
            counts.designations = designations::Entity::insert_many(designation_rows)
                .exec_without_returning(&txn)
                .await
                .map_err(db_error)?;
        }

        txn.commit().await.map_err(db_error)?;

        Ok(counts)
    }
}
