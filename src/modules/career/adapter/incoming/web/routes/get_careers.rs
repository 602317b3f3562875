use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    career::application::{
        domain::entities::CareerRecord, ports::incoming::use_cases::GetCareersError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/careers",
    tag = "careers",
    responses(
        (status = 200, description = "Every stored career, oldest first", body = inline(SuccessResponse<Vec<CareerRecord>>)),
        (status = 500, description = "Career store unavailable", body = ErrorResponse)
    )
)]
#[get("/api/careers")]
pub async fn get_careers_handler(data: web::Data<AppState>) -> impl Responder {
    match data.career.get_list.execute().await {
        Ok(careers) => ApiResponse::success(careers),
        Err(err) => map_get_careers_error(err),
    }
}

fn map_get_careers_error(err: GetCareersError) -> HttpResponse {
    match err {
        GetCareersError::QueryFailed(e) => {
            error!(error = %e, "Failed to fetch careers");
            ApiResponse::internal_error()
        }
    }
}
