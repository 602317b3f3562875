use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::career::application::{
    domain::entities::CareerRecord,
    ports::outgoing::{CareerQuery, CareerQueryError},
};

use super::sea_orm_entity::{Column as CareerColumn, Entity as CareerEntity, Model as CareerModel};

#[derive(Debug, Clone)]
pub struct CareerQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CareerQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CareerQuery for CareerQueryPostgres {
    async fn fetch_all(&self) -> Result<Vec<CareerRecord>, CareerQueryError> {
        let models: Vec<CareerModel> = CareerEntity::find()
            .order_by_asc(CareerColumn::CreatedAt)
            .order_by_asc(CareerColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| CareerQueryError::DatabaseError(e.to_string()))?;

        models
            .iter()
            .map(|m| m.to_domain().map_err(CareerQueryError::DatabaseError))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};
    use serde_json::json;
    use uuid::Uuid;

    fn create_career_model(role: &str, skills: &[&str], offset_seconds: i64) -> CareerModel {
        let created_at = (Utc::now() + chrono::Duration::seconds(offset_seconds)).fixed_offset();

        CareerModel {
            id: Uuid::new_v4(),
            role: role.to_string(),
            designation: "Software Engineer".to_string(),
            required_skills: json!(skills),
            next_skills: json!(["Docker"]),
            resources: json!([]),
            created_at,
            updated_at: created_at,
        }
    }

    #[tokio::test]
    async fn test_fetch_all_success() {
        let first = create_career_model("Frontend Developer", &["HTML", "React"], 10);
        let second = create_career_model("Backend Developer", &["Node.js"], 20);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![first.clone(), second.clone()]])
            .into_connection();

        let query = CareerQueryPostgres::new(Arc::new(db));

        let result = query.fetch_all().await;

        assert!(result.is_ok());
        let careers = result.unwrap();

        assert_eq!(careers.len(), 2);

        // Store order is kept as-is
        assert_eq!(careers[0].role, "Frontend Developer");
        assert_eq!(careers[0].required_skills, vec!["HTML", "React"]);
        assert_eq!(careers[1].role, "Backend Developer");
        assert_eq!(careers[1].next_skills, vec!["Docker"]);
    }

    #[tokio::test]
    async fn test_fetch_all_empty_result() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<CareerModel>::new()])
            .into_connection();

        let query = CareerQueryPostgres::new(Arc::new(db));

        let careers = query.fetch_all().await.unwrap();
        assert!(careers.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "connection lost".into(),
            ))])
            .into_connection();

        let query = CareerQueryPostgres::new(Arc::new(db));

        let result = query.fetch_all().await;

        assert!(matches!(result, Err(CareerQueryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_fetch_all_malformed_row_is_an_error() {
        let mut broken = create_career_model("Broken", &[], 0);
        broken.resources = json!("not a list");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![broken]])
            .into_connection();

        let query = CareerQueryPostgres::new(Arc::new(db));

        match query.fetch_all().await {
            Err(CareerQueryError::DatabaseError(msg)) => assert!(msg.contains("resources")),
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }
}
