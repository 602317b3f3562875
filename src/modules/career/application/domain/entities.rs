use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A learning link attached to a career path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Resource {
    #[schema(example = "React Docs")]
    pub title: String,
    #[schema(example = "https://react.dev")]
    pub link: String,
}

impl Resource {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// A persisted career path.
///
/// `updated_at` is set to `created_at` on insert and nothing ever moves it:
/// records are only replaced wholesale by reseeding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CareerRecord {
    pub id: Uuid,
    #[schema(example = "Frontend Developer")]
    pub role: String,
    #[schema(example = "UI Engineer")]
    pub designation: String,
    pub required_skills: Vec<String>,
    pub next_skills: Vec<String>,
    pub resources: Vec<Resource>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CareerValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),
}

/// A career path that has not been stored yet.
///
/// The only way to build one is [`NewCareer::new`], so every value reaching a
/// repository has a non-blank role and designation and an explicit (possibly
/// empty) list of required skills. Values are stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCareer {
    role: String,
    designation: String,
    required_skills: Vec<String>,
    next_skills: Vec<String>,
    resources: Vec<Resource>,
}

impl NewCareer {
    pub fn new(
        role: Option<String>,
        designation: Option<String>,
        required_skills: Option<Vec<String>>,
        next_skills: Option<Vec<String>>,
        resources: Option<Vec<Resource>>,
    ) -> Result<Self, CareerValidationError> {
        let role = non_blank(role);
        let designation = non_blank(designation);

        let mut missing = Vec::new();
        if role.is_none() {
            missing.push("role");
        }
        if designation.is_none() {
            missing.push("designation");
        }
        if required_skills.is_none() {
            missing.push("required_skills");
        }

        match (role, designation, required_skills) {
            (Some(role), Some(designation), Some(required_skills)) => Ok(Self {
                role,
                designation,
                required_skills,
                next_skills: next_skills.unwrap_or_default(),
                resources: resources.unwrap_or_default(),
            }),
            _ => Err(CareerValidationError::MissingRequiredFields(missing)),
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn required_skills(&self) -> &[String] {
        &self.required_skills
    }

    pub fn next_skills(&self) -> &[String] {
        &self.next_skills
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Attaches the identity and timestamps assigned by the store.
    pub fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> CareerRecord {
        CareerRecord {
            id,
            role: self.role,
            designation: self.designation,
            required_skills: self.required_skills,
            next_skills: self.next_skills,
            resources: self.resources,
            created_at,
            updated_at: created_at,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
