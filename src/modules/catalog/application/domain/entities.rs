use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A programming, tooling or spoken language offered as a profile option.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Language {
    pub id: Uuid,
    #[schema(example = "Rust")]
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A job title offered as a profile option.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Designation {
    pub id: Uuid,
    #[schema(example = "Site Reliability Engineer")]
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Rows written by a catalog reseed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogCounts {
    pub languages: u64,
    pub designations: u64,
}
