use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::errors::admin_error_response;
use crate::api::schemas::ErrorResponse;
use crate::modules::admin::application::domain::AdminEntity;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ApprovalRequest {
    pub approved: bool,
}

/// Approve or hide a testimonial or achievement
#[utoipa::path(
    put,
    path = "/api/admin/{entity}/{id}/approval",
    tag = "admin",
    params(
        ("entity" = String, Path, description = "testimonials or achievements"),
        ("id" = Uuid, Path, description = "Record id"),
    ),
    request_body = ApprovalRequest,
    responses(
        (status = 200, description = "Updated record"),
        (status = 404, description = "Not an approvable type, or no such record", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/{entity}/{id}/approval")]
pub async fn set_approval_handler(
    _admin: AdminUser,
    path: web::Path<(String, Uuid)>,
    body: web::Json<ApprovalRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (segment, id) = path.into_inner();
    let approved = body.approved;
    let admin = &data.admin;

    match segment.parse::<AdminEntity>() {
        Ok(AdminEntity::Testimonials) => match admin.testimonials.set_approval(id, approved).await {
            Ok(record) => ApiResponse::success(record),
            Err(e) => admin_error_response(e),
        },
        Ok(AdminEntity::Achievements) => match admin.achievements.set_approval(id, approved).await {
            Ok(record) => ApiResponse::success(record),
            Err(e) => admin_error_response(e),
        },
        _ => ApiResponse::not_found(
            "UNKNOWN_ENTITY",
            &format!("{segment} has no approval flag"),
        ),
    }
}
