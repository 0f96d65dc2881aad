use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::services::presentation::{
    social_link_views, SocialLinkView,
};
use crate::shared::read_outcome::collection_response;
use crate::AppState;

/// Social links with their resolved icon key
#[utoipa::path(
    get,
    path = "/api/social-links",
    tag = "portfolio",
    responses(
        (status = 200, description = "Social links", body = inline(SuccessResponse<Vec<SocialLinkView>>)),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/social-links")]
pub async fn get_social_links_handler(data: web::Data<AppState>) -> impl Responder {
    let outcome = data
        .portfolio
        .realtime
        .read_social_links()
        .await
        .map(social_link_views);

    collection_response(outcome)
}
