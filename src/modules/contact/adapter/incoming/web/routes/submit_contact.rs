use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::{ContactMessage, ContactSubmission};
use crate::modules::contact::application::services::ContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequestDto {
    #[schema(example = "Ana Lima")]
    pub name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = "Hi! I'd like to talk about a project.")]
    pub message: String,
}

/// Send a contact message
///
/// The message is stored before the owner is notified. A failed notification
/// returns 502 with the message already saved.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequestDto,
    responses(
        (status = 201, description = "Stored and delivered", body = inline(SuccessResponse<ContactMessage>)),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 502, description = "Stored but notification failed", body = ErrorResponse),
        (status = 500, description = "Could not store the message", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let submission = match ContactSubmission::new(&req.name, &req.email, &req.message) {
        Ok(s) => s,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.contact.submit(submission).await {
        Ok(message) => ApiResponse::created(message),
        Err(ContactError::Delivery { .. }) => ApiResponse::bad_gateway(
            "NOTIFICATION_FAILED",
            "Your message was saved but the notification could not be sent",
        ),
        Err(e) => {
            error!(error = %e, "Contact submission failed");
            ApiResponse::internal_error()
        }
    }
}
