use crate::career::application::domain::entities::{CareerRecord, NewCareer, Resource};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::de::DeserializeOwned;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "careers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub role: String,

    pub designation: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub required_skills: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub next_skills: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub resources: Json,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// Fails when a jsonb column does not hold the expected array shape.
    pub fn to_domain(&self) -> Result<CareerRecord, String> {
        Ok(CareerRecord {
            id: self.id,
            role: self.role.clone(),
            designation: self.designation.clone(),
            required_skills: decode_column("required_skills", &self.required_skills)?,
            next_skills: decode_column("next_skills", &self.next_skills)?,
            resources: decode_column::<Vec<Resource>>("resources", &self.resources)?,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

fn decode_column<T: DeserializeOwned>(column: &str, value: &Json) -> Result<T, String> {
    serde_json::from_value(value.clone())
        .map_err(|e| format!("careers.{} has unexpected shape: {}", column, e))
}

/// Builds an insertable row; the id and both timestamps are assigned here.
pub fn new_active_model(career: &NewCareer, id: Uuid, now: DateTimeWithTimeZone) -> ActiveModel {
    ActiveModel {
        id: Set(id),
        role: Set(career.role().to_string()),
        designation: Set(career.designation().to_string()),
        required_skills: Set(serde_json::json!(career.required_skills())),
        next_skills: Set(serde_json::json!(career.next_skills())),
        resources: Set(serde_json::json!(career.resources())),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
