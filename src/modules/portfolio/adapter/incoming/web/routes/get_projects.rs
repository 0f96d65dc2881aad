use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::domain::entities::Project;
use crate::modules::portfolio::application::services::presentation::{
    distinct_tags, filter_projects_by_tag,
};
use crate::shared::read_outcome::collection_response;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProjectsQuery {
    /// Case-insensitive tag filter
    #[param(example = "Rust")]
    pub tag: Option<String>,
}

/// List projects
///
/// Served from the realtime cache, newest first. `tag` keeps the original order.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "portfolio",
    params(ProjectsQuery),
    responses(
        (status = 200, description = "Projects", body = inline(SuccessResponse<Vec<Project>>)),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<ProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let tag = query.into_inner().tag;

    let outcome = data
        .portfolio
        .realtime
        .read_projects()
        .await
        .map(|projects| filter_projects_by_tag(projects, tag.as_deref()));

    collection_response(outcome)
}

/// Distinct project tags
#[utoipa::path(
    get,
    path = "/api/projects/tags",
    tag = "portfolio",
    responses(
        (status = 200, description = "Tags in first-seen order", body = inline(SuccessResponse<Vec<String>>)),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/projects/tags")]
pub async fn get_project_tags_handler(data: web::Data<AppState>) -> impl Responder {
    let outcome = data
        .portfolio
        .realtime
        .read_projects()
        .await
        .map(|projects| distinct_tags(&projects));

    collection_response(outcome)
}
