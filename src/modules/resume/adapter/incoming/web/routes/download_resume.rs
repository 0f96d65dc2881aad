use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Download the résumé as PDF
#[utoipa::path(
    get,
    path = "/api/resume.pdf",
    tag = "portfolio",
    responses(
        (status = 200, description = "application/pdf attachment"),
        (status = 500, description = "Data could not be read", body = ErrorResponse),
    )
)]
#[get("/api/resume.pdf")]
pub async fn download_resume_handler(data: web::Data<AppState>) -> impl Responder {
    match data.resume.generate_pdf().await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename("resume.pdf".to_string())],
            })
            .body(bytes),
        Err(e) => {
            error!(error = %e, "Résumé generation failed");
            ApiResponse::internal_error()
        }
    }
}
