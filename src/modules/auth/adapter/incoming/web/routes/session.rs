use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::SessionProfile;
use crate::modules::auth::application::use_cases::session::SessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Current session
///
/// Resolves the profile behind the bearer token.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Signed-in profile", body = inline(SuccessResponse<SessionProfile>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/session")]
pub async fn session_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.auth.session.execute(user.profile_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(SessionError::ProfileNotFound) => {
            ApiResponse::unauthorized("SESSION_INVALID", "Profile no longer exists")
        }
        Err(SessionError::QueryError(ref e)) => {
            error!(error = %e, "Session lookup failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::use_cases::session::SessionUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_jwt_service, token_provider_data};
    use crate::tests::support::stubs::MemoryProfileQuery;
    use crate::modules::auth::application::ports::outgoing::TokenProvider;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use std::sync::Arc;
    use uuid::Uuid;

    #[actix_web::test]
    async fn test_session_returns_profile() {
        let query = MemoryProfileQuery::with_admin("owner@example.com", None);
        let profile = query.profiles()[0].clone();
        let state = TestAppStateBuilder::default()
            .with_session(SessionUseCase::new(Arc::new(query)))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(session_handler),
        )
        .await;

        let token = test_jwt_service()
            .generate_access_token(profile.id, true)
            .unwrap();
        let req = test::TestRequest::get()
            .uri("/api/auth/session")
            .insert_header(("Authorization", bearer(&token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["email"], "owner@example.com");
        assert_eq!(body["data"]["is_admin"], true);
    }

    #[actix_web::test]
    async fn test_session_for_deleted_profile_is_401() {
        let state = TestAppStateBuilder::default()
            .with_session(SessionUseCase::new(Arc::new(MemoryProfileQuery::default())))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(session_handler),
        )
        .await;

        let token = test_jwt_service()
            .generate_access_token(Uuid::new_v4(), true)
            .unwrap();
        let req = test::TestRequest::get()
            .uri("/api/auth/session")
            .insert_header(("Authorization", bearer(&token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_session_without_token_is_401() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(session_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/auth/session").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
