use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::domain::AdminDataset;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin dataset
///
/// Every collection including unapproved rows, plus contact messages.
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "admin",
    responses(
        (status = 200, description = "Admin dataset", body = inline(SuccessResponse<AdminDataset>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an administrator", body = ErrorResponse),
        (status = 500, description = "A collection could not be read", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/dashboard")]
pub async fn dashboard_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.admin.dataset.load().await {
        Ok(dataset) => ApiResponse::success(dataset),
        Err(_) => ApiResponse::internal_error(),
    }
}
