use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::domain::entities::AboutSection;
use crate::shared::read_outcome::record_response;
use crate::AppState;

/// The about section
///
/// Served from a TTL cache that is also dropped whenever the about table changes.
#[utoipa::path(
    get,
    path = "/api/about",
    tag = "portfolio",
    responses(
        (status = 200, description = "About section", body = inline(SuccessResponse<AboutSection>)),
        (status = 404, description = "Not written yet", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> impl Responder {
    let outcome = data.portfolio.facade.get_about_cached().await;
    record_response(outcome, "ABOUT_NOT_FOUND", "About section has not been written yet")
}
