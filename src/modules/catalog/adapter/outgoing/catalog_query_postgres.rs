use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::catalog::application::{
    domain::entities::{Designation, Language},
    ports::outgoing::{CatalogQuery, CatalogQueryError},
};

use super::sea_orm_entity::{designations, languages};

#[derive(Debug, Clone)]
pub struct CatalogQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CatalogQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogQuery for CatalogQueryPostgres {
    async fn fetch_languages(&self) -> Result<Vec<Language>, CatalogQueryError> {
        let models = languages::Entity::find()
            .order_by_asc(languages::Column::Name)
            .order_by_asc(languages::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| CatalogQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(languages::Model::to_domain).collect())
    }

    async fn fetch_designations(&self) -> Result<Vec<Designation>, CatalogQueryError> {
        let models = designations::Entity::find()
            .order_by_asc(designations::Column::Title)
            .order_by_asc(designations::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| CatalogQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(designations::Model::to_domain).collect())
    }
}
