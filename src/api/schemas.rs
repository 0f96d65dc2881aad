// src/api/schemas.rs
//! Envelope shapes for the OpenAPI document. Handlers build the real
//! bodies through `ApiResponse`; these only describe them.
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine-readable code, e.g. `VALIDATION_ERROR` or `NOT_FOUND`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,
    #[schema(example = "title is required")]
    pub message: String,
}
