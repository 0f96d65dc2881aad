use actix_web::HttpResponse;
use tracing::error;

use crate::modules::admin::application::services::AdminError;
use crate::modules::media::application::domain::ImageUploadError;
use crate::modules::media::application::services::{CompressionError, MediaError};
use crate::shared::api::ApiResponse;

pub(super) fn admin_error_response(err: AdminError) -> HttpResponse {
    match err {
        AdminError::Validation(e) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        AdminError::InvalidDraft(msg) => ApiResponse::bad_request("INVALID_DRAFT", &msg),
        AdminError::Image(e @ ImageUploadError::TooLarge(_)) => {
            ApiResponse::payload_too_large("IMAGE_TOO_LARGE", &e.to_string())
        }
        AdminError::Image(e) => ApiResponse::bad_request("INVALID_IMAGE", &e.to_string()),
        AdminError::Media(MediaError::Compression(e @ CompressionError::Undecodable(_))) => {
            ApiResponse::bad_request("INVALID_IMAGE", &e.to_string())
        }
        AdminError::ImageNotSupported => ApiResponse::bad_request(
            "IMAGE_NOT_SUPPORTED",
            "This content type does not store images",
        ),
        AdminError::NotFound => ApiResponse::not_found("NOT_FOUND", "Record not found"),
        AdminError::Media(MediaError::Storage(e)) => {
            error!(error = %e, "Image storage failed");
            ApiResponse::bad_gateway("STORAGE_ERROR", "Image storage is unavailable")
        }
        other => {
            error!(error = %other, "Admin operation failed");
            ApiResponse::internal_error()
        }
    }
}
