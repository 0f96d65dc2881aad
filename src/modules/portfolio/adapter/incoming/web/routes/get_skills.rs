use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::services::presentation::{group_skills, SkillGroup};
use crate::shared::read_outcome::collection_response;
use crate::AppState;

/// Skills grouped by category
///
/// Categories appear in the order they are first seen.
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "portfolio",
    responses(
        (status = 200, description = "Skill groups", body = inline(SuccessResponse<Vec<SkillGroup>>)),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    let outcome = data.portfolio.facade.get_skills().await.map(group_skills);
    collection_response(outcome)
}
