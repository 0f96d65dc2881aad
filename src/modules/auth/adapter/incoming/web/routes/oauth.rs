use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::domain::entities::IssuedTokens;
use crate::modules::auth::application::use_cases::oauth_login::OAuthLoginError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, http::header, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::IntoParams;

fn map_oauth_error(e: OAuthLoginError) -> HttpResponse {
    match e {
        OAuthLoginError::UnknownProvider(provider) => ApiResponse::not_found(
            "UNKNOWN_PROVIDER",
            &format!("OAuth provider '{provider}' is not configured"),
        ),
        OAuthLoginError::InvalidState => {
            ApiResponse::unauthorized("INVALID_STATE", "OAuth state is invalid or expired")
        }
        OAuthLoginError::ProviderFailed(ref msg) => {
            warn!(error = %msg, "OAuth provider exchange failed");
            ApiResponse::bad_gateway("PROVIDER_ERROR", "OAuth provider request failed")
        }
        OAuthLoginError::NoProfile => {
            ApiResponse::forbidden("NO_PROFILE", "No profile is registered for this account")
        }
        OAuthLoginError::NotAdmin => {
            ApiResponse::forbidden("NOT_ADMIN", "Administrator access required")
        }
        OAuthLoginError::QueryError(ref msg) | OAuthLoginError::TokenGenerationFailed(ref msg) => {
            error!(error = %msg, "OAuth sign-in failed");
            ApiResponse::internal_error()
        }
    }
}

/// Start an OAuth sign-in
///
/// Redirects to the provider's authorize page with a signed state token.
#[utoipa::path(
    get,
    path = "/api/auth/oauth/{provider}",
    tag = "auth",
    params(("provider" = String, Path, description = "Configured provider name", example = "github")),
    responses(
        (status = 302, description = "Redirect to the provider"),
        (status = 404, description = "Provider not configured", body = ErrorResponse),
    )
)]
#[get("/api/auth/oauth/{provider}")]
pub async fn oauth_begin_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let provider = path.into_inner().to_lowercase();

    match data.auth.oauth.begin(&provider) {
        Ok(url) => HttpResponse::Found()
            .insert_header((header::LOCATION, url))
            .finish(),
        Err(e) => map_oauth_error(e),
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct OAuthCallbackQuery {
    pub code: String,
    pub state: String,
}

/// Finish an OAuth sign-in
#[utoipa::path(
    get,
    path = "/api/auth/oauth/{provider}/callback",
    tag = "auth",
    params(
        ("provider" = String, Path, description = "Configured provider name"),
        OAuthCallbackQuery
    ),
    responses(
        (status = 200, description = "Signed in", body = inline(SuccessResponse<IssuedTokens>)),
        (status = 401, description = "Invalid state", body = ErrorResponse),
        (status = 403, description = "No admin profile for this account", body = ErrorResponse),
        (status = 502, description = "Provider failure", body = ErrorResponse),
    )
)]
#[get("/api/auth/oauth/{provider}/callback")]
pub async fn oauth_callback_handler(
    path: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let provider = path.into_inner().to_lowercase();
    let query = query.into_inner();

    match data
        .auth
        .oauth
        .complete(&provider, &query.code, &query.state)
        .await
    {
        Ok(issued) => ApiResponse::success(issued),
        Err(e) => map_oauth_error(e),
    }
}
