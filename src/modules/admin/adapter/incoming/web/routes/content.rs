use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use utoipa::ToSchema;
use uuid::Uuid;

use super::errors::admin_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::domain::{
    AdminDataset, AdminEntity, DraftForm, EditMode, UnknownEntity,
};
use crate::modules::admin::application::services::{AdminError, ContentEditor};
use crate::modules::admin::application::AdminServices;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::media::application::domain::{ImagePayload, ImageUpload};
use crate::modules::portfolio::application::domain::drafts::ContentDraft;
use crate::modules::portfolio::application::ports::outgoing::ContentStoreError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Runs `$body` with `$editor` bound to the editor for `$entity`.
macro_rules! with_editor {
    ($admin:expr, $entity:expr, |$editor:ident| $body:expr) => {
        match $entity {
            AdminEntity::Projects => {
                let $editor = &*$admin.projects;
                $body
            }
            AdminEntity::Experience => {
                let $editor = &*$admin.experience;
                $body
            }
            AdminEntity::Skills => {
                let $editor = &*$admin.skills;
                $body
            }
            AdminEntity::Certificates => {
                let $editor = &*$admin.certificates;
                $body
            }
            AdminEntity::Achievements => {
                let $editor = &*$admin.achievements;
                $body
            }
            AdminEntity::Testimonials => {
                let $editor = &*$admin.testimonials;
                $body
            }
            AdminEntity::SocialLinks => {
                let $editor = &*$admin.social_links;
                $body
            }
            AdminEntity::About => {
                let $editor = &*$admin.about;
                $body
            }
        }
    };
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminSaveRequest {
    /// Field set of the content type named in the path.
    #[schema(value_type = Object)]
    pub draft: Value,
    /// Replaces the stored image. Omit to keep it.
    pub image: Option<ImagePayload>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminSaveResponse {
    #[schema(value_type = Object)]
    pub record: Value,
    /// `null` when the refresh after the write failed.
    pub dataset: Option<AdminDataset>,
}

fn parse_entity(segment: &str) -> Result<AdminEntity, HttpResponse> {
    segment
        .parse()
        .map_err(|e: UnknownEntity| ApiResponse::not_found("UNKNOWN_ENTITY", &e.to_string()))
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, AdminError> {
    serde_json::to_value(value)
        .map_err(|e| AdminError::Store(ContentStoreError::SerializationError(e.to_string())))
}

async fn save_with<D: ContentDraft>(
    editor: &ContentEditor<D>,
    mode: EditMode,
    draft: Value,
    image: Option<ImageUpload>,
) -> Result<Value, AdminError> {
    let draft: D =
        serde_json::from_value(draft).map_err(|e| AdminError::InvalidDraft(e.to_string()))?;
    let record = editor.save(mode, draft, image).await?;
    to_value(&record)
}

async fn draft_with<D: ContentDraft>(
    editor: &ContentEditor<D>,
    id: Uuid,
) -> Result<Value, AdminError> {
    let form: DraftForm<D> = editor.load_draft(id).await?;
    to_value(&form)
}

async fn remove_image_with<D: ContentDraft>(
    editor: &ContentEditor<D>,
    id: Uuid,
) -> Result<Value, AdminError> {
    let record = editor.remove_image(id).await?;
    to_value(&record)
}

async fn refreshed_dataset(admin: &AdminServices) -> Option<AdminDataset> {
    match admin.dataset.load().await {
        Ok(dataset) => Some(dataset),
        Err(e) => {
            warn!(error = %e, "Write succeeded but the admin dataset could not be refreshed");
            None
        }
    }
}

async fn save(
    admin: &AdminServices,
    entity: AdminEntity,
    mode: EditMode,
    request: AdminSaveRequest,
) -> Result<AdminSaveResponse, AdminError> {
    let image = request.image.map(ImageUpload::try_from).transpose()?;
    let draft = request.draft;

    let record = with_editor!(admin, entity, |editor| save_with(editor, mode, draft, image).await)?;

    Ok(AdminSaveResponse {
        record,
        dataset: refreshed_dataset(admin).await,
    })
}

/// Create a record
///
/// `entity` is one of `projects`, `experience`, `skills`, `certificates`,
/// `achievements`, `testimonials`, `social-links`, `about`.
#[utoipa::path(
    post,
    path = "/api/admin/{entity}",
    tag = "admin",
    params(("entity" = String, Path, description = "Content type")),
    request_body = AdminSaveRequest,
    responses(
        (status = 201, description = "Created, with the refreshed dataset", body = inline(SuccessResponse<AdminSaveResponse>)),
        (status = 400, description = "Invalid draft or image", body = ErrorResponse),
        (status = 404, description = "Unknown content type", body = ErrorResponse),
        (status = 413, description = "Image too large", body = ErrorResponse),
        (status = 502, description = "Image storage failed", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/{entity}")]
pub async fn create_content_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    body: web::Json<AdminSaveRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entity = match parse_entity(&path) {
        Ok(e) => e,
        Err(resp) => return resp,
    };

    match save(&data.admin, entity, EditMode::Create, body.into_inner()).await {
        Ok(saved) => ApiResponse::created(saved),
        Err(e) => admin_error_response(e),
    }
}

/// Replace a record
///
/// Without a new image the stored `image_url` is kept.
#[utoipa::path(
    put,
    path = "/api/admin/{entity}/{id}",
    tag = "admin",
    params(
        ("entity" = String, Path, description = "Content type"),
        ("id" = Uuid, Path, description = "Record id"),
    ),
    request_body = AdminSaveRequest,
    responses(
        (status = 200, description = "Updated, with the refreshed dataset", body = inline(SuccessResponse<AdminSaveResponse>)),
        (status = 400, description = "Invalid draft or image", body = ErrorResponse),
        (status = 404, description = "Unknown content type or record", body = ErrorResponse),
        (status = 502, description = "Image storage failed", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/{entity}/{id}")]
pub async fn update_content_handler(
    _admin: AdminUser,
    path: web::Path<(String, Uuid)>,
    body: web::Json<AdminSaveRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (segment, id) = path.into_inner();
    let entity = match parse_entity(&segment) {
        Ok(e) => e,
        Err(resp) => return resp,
    };

    match save(&data.admin, entity, EditMode::Edit(id), body.into_inner()).await {
        Ok(saved) => ApiResponse::success(saved),
        Err(e) => admin_error_response(e),
    }
}

/// Delete a record and its stored image
#[utoipa::path(
    delete,
    path = "/api/admin/{entity}/{id}",
    tag = "admin",
    params(
        ("entity" = String, Path, description = "Content type"),
        ("id" = Uuid, Path, description = "Record id"),
    ),
    responses(
        (status = 200, description = "Deleted; refreshed dataset", body = inline(SuccessResponse<AdminDataset>)),
        (status = 404, description = "Unknown content type or record", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/{entity}/{id}")]
pub async fn delete_content_handler(
    _admin: AdminUser,
    path: web::Path<(String, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (segment, id) = path.into_inner();
    let entity = match parse_entity(&segment) {
        Ok(e) => e,
        Err(resp) => return resp,
    };

    let admin = &data.admin;
    match with_editor!(admin, entity, |editor| editor.delete(id).await) {
        Ok(()) => ApiResponse::success(refreshed_dataset(admin).await),
        Err(e) => admin_error_response(e),
    }
}

/// Edit-mode draft of a record
#[utoipa::path(
    get,
    path = "/api/admin/{entity}/{id}/draft",
    tag = "admin",
    params(
        ("entity" = String, Path, description = "Content type"),
        ("id" = Uuid, Path, description = "Record id"),
    ),
    responses(
        (status = 200, description = "`{id, draft}` wrapped in the success envelope"),
        (status = 404, description = "Unknown content type or record", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/{entity}/{id}/draft")]
pub async fn load_draft_handler(
    _admin: AdminUser,
    path: web::Path<(String, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (segment, id) = path.into_inner();
    let entity = match parse_entity(&segment) {
        Ok(e) => e,
        Err(resp) => return resp,
    };

    let admin = &data.admin;
    match with_editor!(admin, entity, |editor| draft_with(editor, id).await) {
        Ok(form) => ApiResponse::success(form),
        Err(e) => admin_error_response(e),
    }
}

/// Delete the stored image of a record
#[utoipa::path(
    delete,
    path = "/api/admin/{entity}/{id}/image",
    tag = "admin",
    params(
        ("entity" = String, Path, description = "projects, certificates, achievements or testimonials"),
        ("id" = Uuid, Path, description = "Record id"),
    ),
    responses(
        (status = 200, description = "Record with `image_url` cleared"),
        (status = 400, description = "Content type has no image", body = ErrorResponse),
        (status = 404, description = "Unknown content type or record", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/{entity}/{id}/image")]
pub async fn remove_image_handler(
    _admin: AdminUser,
    path: web::Path<(String, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (segment, id) = path.into_inner();
    let entity = match parse_entity(&segment) {
        Ok(e) => e,
        Err(resp) => return resp,
    };

    let admin = &data.admin;
    match with_editor!(admin, entity, |editor| remove_image_with(editor, id).await) {
        Ok(record) => ApiResponse::success(record),
        Err(e) => admin_error_response(e),
    }
}
