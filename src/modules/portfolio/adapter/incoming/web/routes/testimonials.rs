use actix_web::{get, post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::domain::EditMode;
use crate::modules::admin::application::services::AdminError;
use crate::modules::media::application::domain::{ImagePayload, ImageUpload, ImageUploadError};
use crate::modules::media::application::services::MediaError;
use crate::modules::portfolio::application::domain::drafts::TestimonialDraft;
use crate::modules::portfolio::application::domain::entities::Testimonial;
use crate::shared::api::ApiResponse;
use crate::shared::read_outcome::collection_response;
use crate::AppState;

/// Approved testimonials, newest first
#[utoipa::path(
    get,
    path = "/api/testimonials",
    tag = "portfolio",
    responses(
        (status = 200, description = "Approved testimonials", body = inline(SuccessResponse<Vec<Testimonial>>)),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/testimonials")]
pub async fn get_testimonials_handler(data: web::Data<AppState>) -> impl Responder {
    collection_response(data.portfolio.facade.get_testimonials().await)
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TestimonialSubmission {
    #[schema(example = "Ana Lima")]
    pub name: String,
    pub position: Option<String>,
    pub company: Option<String>,
    pub content: String,
    /// 1 to 5
    #[schema(example = 5)]
    pub rating: i16,
    /// Optional photo
    pub image: Option<ImagePayload>,
}

/// Submit a testimonial
///
/// Stored unapproved; it appears once an administrator approves it.
#[utoipa::path(
    post,
    path = "/api/testimonials",
    tag = "portfolio",
    request_body = TestimonialSubmission,
    responses(
        (status = 201, description = "Stored, pending approval", body = inline(SuccessResponse<Testimonial>)),
        (status = 400, description = "Invalid testimonial or image", body = ErrorResponse),
        (status = 413, description = "Image too large", body = ErrorResponse),
        (status = 502, description = "Image storage failed", body = ErrorResponse),
    )
)]
#[post("/api/testimonials")]
pub async fn submit_testimonial_handler(
    req: web::Json<TestimonialSubmission>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let image = match req.image.map(ImageUpload::try_from).transpose() {
        Ok(image) => image,
        Err(e @ ImageUploadError::TooLarge(_)) => {
            return ApiResponse::payload_too_large("IMAGE_TOO_LARGE", &e.to_string())
        }
        Err(e) => return ApiResponse::bad_request("INVALID_IMAGE", &e.to_string()),
    };

    let draft = TestimonialDraft {
        name: req.name,
        position: req.position,
        company: req.company,
        content: req.content,
        rating: req.rating,
        image_url: None,
        is_approved: false,
    };

    match data
        .admin
        .testimonials
        .save(EditMode::Create, draft, image)
        .await
    {
        Ok(testimonial) => ApiResponse::created(testimonial),
        Err(AdminError::Validation(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(AdminError::Media(MediaError::Compression(e))) => {
            ApiResponse::bad_request("INVALID_IMAGE", &e.to_string())
        }
        Err(AdminError::Media(MediaError::Storage(e))) => {
            error!(error = %e, "Testimonial photo upload failed");
            ApiResponse::bad_gateway("STORAGE_ERROR", "Image storage is unavailable")
        }
        Err(e) => {
            error!(error = %e, "Testimonial submission failed");
            ApiResponse::internal_error()
        }
    }
}
