use actix_web::{delete, get, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::contact::application::services::ContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReadFlagRequest {
    pub read: bool,
}

fn contact_error_response(err: ContactError) -> actix_web::HttpResponse {
    match err {
        ContactError::NotFound => {
            ApiResponse::not_found("NOT_FOUND", "Contact message not found")
        }
        other => {
            error!(error = %other, "Contact moderation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Contact messages, unread first
#[utoipa::path(
    get,
    path = "/api/admin/contacts",
    tag = "admin",
    responses(
        (status = 200, description = "Messages", body = inline(SuccessResponse<Vec<ContactMessage>>)),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/contacts")]
pub async fn list_contacts_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.contact.list().await {
        Ok(messages) => ApiResponse::success(messages),
        Err(e) => contact_error_response(e),
    }
}

/// Mark a contact message read or unread
#[utoipa::path(
    put,
    path = "/api/admin/contacts/{id}/read",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Message id")),
    request_body = ReadFlagRequest,
    responses(
        (status = 200, description = "Updated message", body = inline(SuccessResponse<ContactMessage>)),
        (status = 404, description = "No such message", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/contacts/{id}/read")]
pub async fn set_contact_read_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    body: web::Json<ReadFlagRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.set_read(path.into_inner(), body.read).await {
        Ok(message) => ApiResponse::success(message),
        Err(e) => contact_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/contacts/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Message id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such message", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/contacts/{id}")]
pub async fn delete_contact_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => contact_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::domain::ContactSubmission;
    use crate::modules::contact::application::ports::outgoing::ContactRepository;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_token, bearer, token_provider_data};
    use crate::tests::support::stubs::MemoryContactRepository;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    async fn seeded() -> (Arc<MemoryContactRepository>, Uuid) {
        let repo = Arc::new(MemoryContactRepository::default());
        let submission = ContactSubmission::new("Ana", "ana@example.com", "Hello").unwrap();
        let stored = repo.insert(&submission).await.unwrap();
        (repo, stored.id)
    }

    #[actix_web::test]
    async fn test_mark_read_then_delete() {
        let (repo, id) = seeded().await;
        let state = TestAppStateBuilder::default()
            .with_contact_repository(repo.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(list_contacts_handler)
                .service(set_contact_read_handler)
                .service(delete_contact_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/contacts/{id}/read"))
            .insert_header(("Authorization", bearer(&admin_token())))
            .set_json(json!({"read": true}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["read"], true);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/contacts/{id}"))
            .insert_header(("Authorization", bearer(&admin_token())))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(repo.messages().is_empty());

        let req = test::TestRequest::get()
            .uri("/api/admin/contacts")
            .insert_header(("Authorization", bearer(&admin_token())))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"], json!([]));
    }

    #[actix_web::test]
    async fn test_unknown_message_is_not_found() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(delete_contact_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/contacts/{}", Uuid::new_v4()))
            .insert_header(("Authorization", bearer(&admin_token())))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
