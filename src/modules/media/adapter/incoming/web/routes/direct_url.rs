use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct DirectUrlRequest {
    #[schema(example = "https://drive.google.com/file/d/1AbC/view?usp=sharing")]
    pub url: String,
    /// Copy the image to the image host. Administrators only.
    #[serde(default)]
    pub rehost: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DirectUrlResponse {
    pub url: String,
}

/// Normalise an image link
///
/// Google Drive share links become direct view links. With `rehost` the image
/// is also copied to the image host; on failure the input comes back unchanged.
#[utoipa::path(
    post,
    path = "/api/media/direct-url",
    tag = "media",
    request_body = DirectUrlRequest,
    responses(
        (status = 200, description = "Usable image URL", body = inline(SuccessResponse<DirectUrlResponse>)),
        (status = 401, description = "Rehosting requested without an admin token", body = ErrorResponse),
    )
)]
#[post("/api/media/direct-url")]
pub async fn direct_url_handler(
    req: web::Json<DirectUrlRequest>,
    admin: Option<AdminUser>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let rehoster = &data.media.rehoster;

    let url = if req.rehost {
        if admin.is_none() {
            return ApiResponse::unauthorized(
                "ADMIN_REQUIRED",
                "Rehosting images requires an administrator",
            );
        }
        rehoster.rehost(&req.url).await
    } else {
        rehoster.convert(&req.url)
    };

    ApiResponse::success(DirectUrlResponse { url })
}
