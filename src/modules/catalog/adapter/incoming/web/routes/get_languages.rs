use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::application::{
        domain::entities::Language, ports::incoming::use_cases::GetLanguagesError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/languages",
    tag = "catalog",
    responses(
        (status = 200, description = "Languages ordered by name", body = inline(SuccessResponse<Vec<Language>>)),
        (status = 500, description = "Catalog store unavailable", body = ErrorResponse)
    )
)]
#[get("/api/languages")]
pub async fn get_languages_handler(data: web::Data<AppState>) -> impl Responder {
    match data.catalog.get_languages.execute().await {
        Ok(languages) => ApiResponse::success(languages),
        Err(err) => map_get_languages_error(err),
    }
}

fn map_get_languages_error(err: GetLanguagesError) -> HttpResponse {
    match err {
        GetLanguagesError::QueryFailed(e) => {
            error!(error = %e, "Failed to fetch languages");
            ApiResponse::internal_error()
        }
    }
}
