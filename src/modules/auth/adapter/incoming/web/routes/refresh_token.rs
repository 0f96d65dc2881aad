use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::refresh_token::{
    RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    pub refresh_token: String,
}

/// Rotate the token pair
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New token pair", body = inline(SuccessResponse<RefreshTokenResponse>)),
        (status = 400, description = "Missing refresh token", body = ErrorResponse),
        (status = 401, description = "Expired, invalid or revoked token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
        (status = 503, description = "Revocation store unavailable", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match RefreshTokenRequest::new(req.into_inner().refresh_token) {
        Ok(r) => r,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.refresh.execute(request).await {
        Ok(pair) => ApiResponse::success(pair),

        Err(RefreshTokenError::TokenExpired) => {
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Refresh token has expired")
        }

        Err(RefreshTokenError::TokenInvalid) | Err(RefreshTokenError::InvalidTokenType) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(RefreshTokenError::TokenRevoked) => {
            warn!("Revoked refresh token presented");
            ApiResponse::unauthorized("TOKEN_REVOKED", "Refresh token has been revoked")
        }

        Err(RefreshTokenError::BlacklistUnavailable(ref e)) => {
            error!(error = %e, "Token blacklist unavailable");
            ApiResponse::error(
                actix_web::http::StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                "Token service temporarily unavailable",
            )
        }

        Err(RefreshTokenError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}
