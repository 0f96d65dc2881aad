use crate::api::schemas::SuccessResponse;
use crate::modules::auth::application::use_cases::logout::{LogoutRequest, LogoutResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};

/// Sign out
///
/// Revokes the refresh token when one is supplied. Always succeeds.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body(content = LogoutRequest, description = "Refresh token to revoke"),
    responses(
        (status = 200, description = "Signed out", body = inline(SuccessResponse<LogoutResponse>)),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_handler(
    body: Option<web::Json<LogoutRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = body.map(|b| b.into_inner()).unwrap_or_default();
    ApiResponse::success(data.auth.logout.execute(request).await)
}
