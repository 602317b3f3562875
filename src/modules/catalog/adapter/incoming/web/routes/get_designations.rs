use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::application::{
        domain::entities::Designation, ports::incoming::use_cases::GetDesignationsError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/designations",
    tag = "catalog",
    responses(
        (status = 200, description = "Job designations ordered by title", body = inline(SuccessResponse<Vec<Designation>>)),
        (status = 500, description = "Catalog store unavailable", body = ErrorResponse)
    )
)]
#[get("/api/designations")]
pub async fn get_designations_handler(data: web::Data<AppState>) -> impl Responder {
    match data.catalog.get_designations.execute().await {
        Ok(designations) => ApiResponse::success(designations),
        Err(err) => map_get_designations_error(err),
    }
}

fn map_get_designations_error(err: GetDesignationsError) -> HttpResponse {
    match err {
        GetDesignationsError::QueryFailed(e) => {
            error!(error = %e, "Failed to fetch designations");
            ApiResponse::internal_error()
        }
    }
}
