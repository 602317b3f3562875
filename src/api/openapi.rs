use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::career::{
    adapter::incoming::web::routes::{CreateCareerRequest, CreateCareerResponse, RecommendRequest},
    application::domain::{
        entities::{CareerRecord, Resource},
        matcher::{MatchedCareer, NoResults, Recommendation, RecordSource},
    },
};
use crate::catalog::application::domain::entities::{Designation, Language};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Career Compass API",
        version = "1.0.0",
        description = "Career path recommendations matched against skills, roles and keywords"
    ),
    paths(
        // Career endpoints
        crate::career::adapter::incoming::web::routes::recommend_handler,
        crate::career::adapter::incoming::web::routes::get_careers_handler,
        crate::career::adapter::incoming::web::routes::create_career_handler,

        // Catalog endpoints
        crate::catalog::adapter::incoming::web::routes::get_languages_handler,
        crate::catalog::adapter::incoming::web::routes::get_designations_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Career DTOs
            RecommendRequest,
            Recommendation,
            MatchedCareer,
            NoResults,
            RecordSource,
            CareerRecord,
            Resource,
            CreateCareerRequest,
            CreateCareerResponse,

            // Catalog DTOs
            Language,
            Designation
        )
    ),
    tags(
        (name = "careers", description = "Career recommendation and management endpoints"),
        (name = "catalog", description = "Language and job designation reference lists"),
    )
)]
pub struct ApiDoc;
