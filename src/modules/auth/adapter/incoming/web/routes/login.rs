use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::domain::entities::IssuedTokens;
use crate::modules::auth::application::use_cases::login::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from the admin sign-in form
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "owner@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Admin sign-in
///
/// Verifies the password and returns an access/refresh pair. Only admin
/// profiles may sign in.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Signed in", body = inline(SuccessResponse<IssuedTokens>)),
        (status = 400, description = "Malformed credentials", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (status = 403, description = "Profile is not an administrator", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.login.execute(request).await {
        Ok(issued) => {
            info!(profile_id = %issued.profile.id, "Admin signed in");
            ApiResponse::success(issued)
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::NotAdmin) => {
            warn!("Login refused: profile is not an administrator");
            ApiResponse::forbidden("NOT_ADMIN", "Administrator access required")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Profile query failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::SessionProfile;
    use crate::modules::auth::application::use_cases::login::ILoginUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use uuid::Uuid;

    struct MockLoginSuccess;

    #[async_trait]
    impl ILoginUseCase for MockLoginSuccess {
        async fn execute(&self, request: LoginRequest) -> Result<IssuedTokens, LoginError> {
            Ok(IssuedTokens {
                access_token: "access".into(),
                refresh_token: "refresh".into(),
                profile: SessionProfile {
                    id: Uuid::new_v4(),
                    email: request.email().to_string(),
                    display_name: "Owner".into(),
                    is_admin: true,
                },
            })
        }
    }

    struct MockLoginFailure(LoginError);

    #[async_trait]
    impl ILoginUseCase for MockLoginFailure {
        async fn execute(&self, _request: LoginRequest) -> Result<IssuedTokens, LoginError> {
            Err(self.0.clone())
        }
    }

    async fn post_login(
        use_case: impl ILoginUseCase + 'static,
        body: Value,
    ) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default().with_login(use_case).build();
        let app = test::init_service(App::new().app_data(state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_login_success() {
        let (status, body) = post_login(
            MockLoginSuccess,
            json!({"email": "Owner@Example.com", "password": "pw"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["access_token"], "access");
        assert_eq!(body["data"]["profile"]["email"], "owner@example.com");
    }

    #[actix_web::test]
    async fn test_login_invalid_email_is_400() {
        let (status, body) = post_login(
            MockLoginSuccess,
            json!({"email": "not-an-email", "password": "pw"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials_is_401() {
        let (status, body) = post_login(
            MockLoginFailure(LoginError::InvalidCredentials),
            json!({"email": "owner@example.com", "password": "wrong"}),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn test_login_non_admin_is_403() {
        let (status, body) = post_login(
            MockLoginFailure(LoginError::NotAdmin),
            json!({"email": "reader@example.com", "password": "pw"}),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "NOT_ADMIN");
    }

    #[actix_web::test]
    async fn test_login_query_error_is_500() {
        let (status, body) = post_login(
            MockLoginFailure(LoginError::QueryError("pool exhausted".into())),
            json!({"email": "owner@example.com", "password": "pw"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
