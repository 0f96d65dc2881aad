use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::portfolio::application::domain::site_pages::SitePage;
use crate::modules::portfolio::application::services::PageBundle;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Client route, e.g. `/portfolio`
    #[param(example = "/portfolio")]
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub page: SitePage,
    pub path: &'static str,
    pub title: &'static str,
    pub data: PageBundle,
}

/// Resolve a client route to the data its page renders
#[utoipa::path(
    get,
    path = "/api/pages",
    tag = "portfolio",
    params(PageQuery),
    responses(
        (status = 200, description = "Page data, tagged by page name"),
        (status = 401, description = "The admin page needs an admin token", body = ErrorResponse),
        (status = 404, description = "No page for this route", body = ErrorResponse),
        (status = 500, description = "A read behind the page failed", body = ErrorResponse),
    )
)]
#[get("/api/pages")]
pub async fn get_page_handler(
    query: web::Query<PageQuery>,
    admin: Option<AdminUser>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(page) = SitePage::resolve(&query.path) else {
        return ApiResponse::not_found("PAGE_NOT_FOUND", "No page at this path");
    };

    if page.requires_admin() && admin.is_none() {
        return ApiResponse::unauthorized("ADMIN_REQUIRED", "Sign in as an administrator");
    }

    match data.portfolio.pages.assemble(page).await {
        Ok(bundle) => ApiResponse::success(PageResponse {
            page,
            path: page.path(),
            title: page.title(),
            data: bundle,
        }),
        Err(_) => ApiResponse::internal_error(),
    }
}
