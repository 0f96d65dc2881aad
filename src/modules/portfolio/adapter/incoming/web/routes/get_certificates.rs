use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::domain::entities::{Certificate, CertificateType};
use crate::modules::portfolio::application::services::presentation::filter_certificates;
use crate::shared::api::ApiResponse;
use crate::shared::read_outcome::{collection_response, record_response};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct CertificatesQuery {
    /// `event` or `course`; omitted means all
    #[serde(rename = "type")]
    #[param(rename = "type", example = "course")]
    pub kind: Option<String>,
}

/// List certificates, most recent first
#[utoipa::path(
    get,
    path = "/api/certificates",
    tag = "portfolio",
    params(CertificatesQuery),
    responses(
        (status = 200, description = "Certificates", body = inline(SuccessResponse<Vec<Certificate>>)),
        (status = 400, description = "Unknown type", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/certificates")]
pub async fn get_certificates_handler(
    query: web::Query<CertificatesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let kind = match query.into_inner().kind.filter(|k| !k.trim().is_empty()) {
        None => None,
        Some(raw) => match raw.parse::<CertificateType>() {
            Ok(kind) => Some(kind),
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        },
    };

    let outcome = data
        .portfolio
        .facade
        .get_certificates()
        .await
        .map(|items| filter_certificates(items, kind));

    collection_response(outcome)
}

/// One certificate
#[utoipa::path(
    get,
    path = "/api/certificates/{id}",
    tag = "portfolio",
    params(("id" = Uuid, Path, description = "Certificate id")),
    responses(
        (status = 200, description = "Certificate", body = inline(SuccessResponse<Certificate>)),
        (status = 404, description = "No such certificate", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/certificates/{id}")]
pub async fn get_certificate_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let outcome = data.portfolio.facade.get_certificate(path.into_inner()).await;
    record_response(outcome, "CERTIFICATE_NOT_FOUND", "Certificate not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::application::domain::drafts::CertificateDraft;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures;
    use crate::tests::support::memory_store::MemoryStore;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_type_filter() {
        let store = Arc::new(MemoryStore::<CertificateDraft>::with_rows(vec![
            fixtures::certificate("RustConf", CertificateType::Event),
            fixtures::certificate("Databases", CertificateType::Course),
        ]));
        let state = TestAppStateBuilder::default().with_certificates(store).build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_certificates_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/certificates?type=course")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "Databases");
        assert_eq!(items[0]["type"], "course");
    }

    #[actix_web::test]
    async fn test_single_certificate() {
        let cert = fixtures::certificate("RustConf", CertificateType::Event);
        let id = cert.id;
        let store = Arc::new(MemoryStore::<CertificateDraft>::with_rows(vec![cert]));
        let state = TestAppStateBuilder::default().with_certificates(store).build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_certificate_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/certificates/{id}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["title"], "RustConf");

        let req = test::TestRequest::get()
            .uri(&format!("/api/certificates/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "CERTIFICATE_NOT_FOUND");
    }
}
