use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    career::application::{
        domain::matcher::Recommendation,
        ports::incoming::use_cases::RecommendCareersError,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecommendRequest {
    /// A skill, role or keyword. Aliases such as `ai` or `js` are expanded.
    #[schema(example = "react")]
    pub input: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/recommend",
    tag = "careers",
    request_body = RecommendRequest,
    responses(
        (
            status = 200,
            description = "Matching careers, best first. A single placeholder entry when nothing matched",
            body = Vec<Recommendation>,
            example = json!([{
                "id": "123e4567-e89b-12d3-a456-426614174000",
                "role": "Frontend Developer",
                "designation": "UI Engineer",
                "required_skills": ["HTML", "CSS", "JavaScript", "React"],
                "next_skills": ["TypeScript", "Next.js"],
                "resources": [{ "title": "React Docs", "link": "https://react.dev" }],
                "created_at": "2026-03-01T10:00:00Z",
                "updated_at": "2026-03-01T10:00:00Z",
                "source": "db"
            }])
        ),
        (
            status = 400,
            description = "Missing or blank input",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMPTY_INPUT", "message": "Provide 'input' field in body" }
            })
        ),
        (status = 500, description = "Career store unavailable", body = ErrorResponse)
    )
)]
#[post("/api/recommend")]
pub async fn recommend_handler(
    data: web::Data<AppState>,
    payload: web::Json<RecommendRequest>,
) -> impl Responder {
    let input = payload.into_inner().input.unwrap_or_default();

    // Success body is the bare array; errors keep the envelope
    match data.career.recommend.execute(&input).await {
        Ok(recommendations) => HttpResponse::Ok().json(recommendations),
        Err(err) => map_recommend_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_recommend_error(err: RecommendCareersError) -> HttpResponse {
    match err {
        RecommendCareersError::InvalidInput => {
            warn!("Recommendation requested without input");
            ApiResponse::bad_request("EMPTY_INPUT", &err.to_string())
        }
        RecommendCareersError::StoreUnavailable(ref e) => {
            error!(error = %e, "Failed to load careers for recommendation");
            ApiResponse::internal_error()
        }
        RecommendCareersError::Internal(ref e) => {
            error!(error = %e, "Failed to rank careers");
            ApiResponse::internal_error()
        }
    }
}
