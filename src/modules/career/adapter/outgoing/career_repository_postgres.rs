use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, TransactionTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::career::application::{
    domain::entities::{CareerRecord, NewCareer},
    ports::outgoing::{CareerRepository, CareerRepositoryError},
};

use super::sea_orm_entity::{new_active_model, Entity as CareerEntity, Model as CareerModel};

#[derive(Debug, Clone)]
pub struct CareerRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CareerRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: impl std::fmt::Display) -> CareerRepositoryError {
    CareerRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CareerRepository for CareerRepositoryPostgres {
    async fn insert(&self, career: NewCareer) -> Result<CareerRecord, CareerRepositoryError> {
        let active = new_active_model(&career, Uuid::new_v4(), Utc::now().fixed_offset());

        let inserted: CareerModel = active.insert(&*self.db).await.map_err(db_error)?;

        inserted
            .to_domain()
            .map_err(CareerRepositoryError::DatabaseError)
    }

    async fn replace_all(&self, careers: Vec<NewCareer>) -> Result<u64, CareerRepositoryError> {
        let now = Utc::now().fixed_offset();
        let rows: Vec<_> = careers
            .iter()
            .map(|c| new_active_model(c, Uuid::new_v4(), now))
            .collect();

        let txn = self.db.begin().await.map_err(db_error)?;

        CareerEntity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_error)?;

        let inserted = if rows.is_empty() {
            0
        } else {
            CareerEntity::insert_many(rows)
                .exec_without_returning(&txn)
                .await
                .map_err(db_error)?
        };

        txn.commit().await.map_err(db_error)?;

        Ok(inserted)
    }
}
