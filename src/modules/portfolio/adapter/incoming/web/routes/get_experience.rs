use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::domain::entities::{Experience, ExperienceType};
use crate::modules::portfolio::application::services::presentation::filter_experience;
use crate::shared::api::ApiResponse;
use crate::shared::read_outcome::collection_response;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ExperienceQuery {
    /// `work`, `education` or `volunteer`; omitted means all
    #[serde(rename = "type")]
    #[param(rename = "type", example = "work")]
    pub kind: Option<String>,
}

/// List experience
///
/// Most recent start date first.
#[utoipa::path(
    get,
    path = "/api/experience",
    tag = "portfolio",
    params(ExperienceQuery),
    responses(
        (status = 200, description = "Experience entries", body = inline(SuccessResponse<Vec<Experience>>)),
        (status = 400, description = "Unknown type", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/experience")]
pub async fn get_experience_handler(
    query: web::Query<ExperienceQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let kind = match query.into_inner().kind.filter(|k| !k.trim().is_empty()) {
        None => None,
        Some(raw) => match raw.parse::<ExperienceType>() {
            Ok(kind) => Some(kind),
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        },
    };

    let outcome = data
        .portfolio
        .realtime
        .read_experience()
        .await
        .map(|items| filter_experience(items, kind));

    collection_response(outcome)
}
