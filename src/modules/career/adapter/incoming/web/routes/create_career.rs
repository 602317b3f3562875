use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    career::application::{
        domain::entities::{CareerRecord, CareerValidationError, NewCareer, Resource},
        ports::incoming::use_cases::CreateCareerError,
    },
    shared::api::ApiResponse,
    AppState,
};

const CREATED_MESSAGE: &str = "Career successfully added!";

//
// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCareerRequest {
    #[schema(example = "Backend Developer")]
    pub role: Option<String>,
    #[schema(example = "Software Engineer")]
    pub designation: Option<String>,
    #[schema(example = json!(["Node.js", "Express", "MongoDB"]))]
    pub required_skills: Option<Vec<String>>,
    #[schema(example = json!(["Docker", "Kubernetes"]))]
    pub next_skills: Option<Vec<String>>,
    pub resources: Option<Vec<Resource>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateCareerResponse {
    #[schema(example = "Career successfully added!")]
    pub message: String,
    pub career: CareerRecord,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/careers",
    tag = "careers",
    request_body = CreateCareerRequest,
    responses(
        (status = 201, description = "Career stored", body = inline(SuccessResponse<CreateCareerResponse>)),
        (
            status = 400,
            description = "role, designation or required_skills missing",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "MISSING_REQUIRED_FIELDS",
                    "message": "Missing required fields: required_skills"
                }
            })
        ),
        (status = 500, description = "Career store unavailable", body = ErrorResponse)
    )
)]
#[post("/api/careers")]
pub async fn create_career_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateCareerRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    // 1️⃣ Build the domain value (validation happens here)
    let career = match NewCareer::new(
        payload.role,
        payload.designation,
        payload.required_skills,
        payload.next_skills,
        payload.resources,
    ) {
        Ok(career) => career,
        Err(err) => return map_validation_error(err),
    };

    // 2️⃣ Execute use case
    match data.career.create.execute(career).await {
        Ok(career) => {
            info!(career_id = %career.id, role = %career.role, "Career created");
            ApiResponse::created(CreateCareerResponse {
                message: CREATED_MESSAGE.to_string(),
                career,
            })
        }
        Err(err) => map_create_career_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_validation_error(err: CareerValidationError) -> HttpResponse {
    warn!(error = %err, "Rejected career payload");
    match err {
        CareerValidationError::MissingRequiredFields(_) => {
            ApiResponse::bad_request("MISSING_REQUIRED_FIELDS", &err.to_string())
        }
    }
}

fn map_create_career_error(err: CreateCareerError) -> HttpResponse {
    match err {
        CreateCareerError::RepositoryError(e) => {
            error!(error = %e, "Failed to store career");
            ApiResponse::internal_error()
        }
    }
}
