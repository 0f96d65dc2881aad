use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::admin::adapter::incoming::web::routes::{
    AdminSaveRequest, AdminSaveResponse, ApprovalRequest, ReadFlagRequest,
};
use crate::modules::admin::application::domain::AdminDataset;
use crate::modules::auth::adapter::incoming::web::routes::{LoginRequestDto, RefreshTokenRequestDto};
use crate::modules::auth::application::domain::entities::{IssuedTokens, SessionProfile};
use crate::modules::auth::application::use_cases::logout::{LogoutRequest, LogoutResponse};
use crate::modules::auth::application::use_cases::refresh_token::RefreshTokenResponse;
use crate::modules::contact::adapter::incoming::web::routes::ContactRequestDto;
use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::media::adapter::incoming::web::routes::{DirectUrlRequest, DirectUrlResponse};
use crate::modules::media::application::domain::ImagePayload;
use crate::modules::portfolio::adapter::incoming::web::routes::TestimonialSubmission;
use crate::modules::portfolio::application::domain::entities::{
    AboutSection, Achievement, Certificate, CertificateType, Experience, ExperienceType, Project,
    Skill, SocialLink, Testimonial,
};
use crate::modules::portfolio::application::domain::site_pages::SitePage;
use crate::modules::portfolio::application::ports::outgoing::{ChangeEvent, ChangeKind};
use crate::modules::portfolio::application::services::presentation::{SkillGroup, SocialLinkView};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public content, contact and admin editing endpoints for the portfolio site",
    ),
    paths(
        // Public content
        crate::modules::portfolio::adapter::incoming::web::routes::get_projects::get_projects_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_projects::get_project_tags_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_experience::get_experience_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_skills::get_skills_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_certificates::get_certificates_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_certificates::get_certificate_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_achievements::get_achievements_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::testimonials::get_testimonials_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::testimonials::submit_testimonial_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_social_links::get_social_links_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_about::get_about_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_page::get_page_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::realtime_events::realtime_events_handler,
        crate::modules::resume::adapter::incoming::web::routes::download_resume::download_resume_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact::submit_contact_handler,

        // Auth
        crate::modules::auth::adapter::incoming::web::routes::login::login_handler,
        crate::modules::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,
        crate::modules::auth::adapter::incoming::web::routes::logout::logout_handler,
        crate::modules::auth::adapter::incoming::web::routes::session::session_handler,
        crate::modules::auth::adapter::incoming::web::routes::oauth::oauth_begin_handler,
        crate::modules::auth::adapter::incoming::web::routes::oauth::oauth_callback_handler,

        // Media
        crate::modules::media::adapter::incoming::web::routes::direct_url::direct_url_handler,

        // Admin
        crate::modules::admin::adapter::incoming::web::routes::dashboard::dashboard_handler,
        crate::modules::admin::adapter::incoming::web::routes::content::create_content_handler,
        crate::modules::admin::adapter::incoming::web::routes::content::update_content_handler,
        crate::modules::admin::adapter::incoming::web::routes::content::delete_content_handler,
        crate::modules::admin::adapter::incoming::web::routes::content::load_draft_handler,
        crate::modules::admin::adapter::incoming::web::routes::content::remove_image_handler,
        crate::modules::admin::adapter::incoming::web::routes::approval::set_approval_handler,
        crate::modules::admin::adapter::incoming::web::routes::contacts::list_contacts_handler,
        crate::modules::admin::adapter::incoming::web::routes::contacts::set_contact_read_handler,
        crate::modules::admin::adapter::incoming::web::routes::contacts::delete_contact_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Content
            Project,
            Experience,
            ExperienceType,
            Skill,
            SkillGroup,
            Certificate,
            CertificateType,
            Achievement,
            Testimonial,
            TestimonialSubmission,
            SocialLink,
            SocialLinkView,
            AboutSection,
            SitePage,
            ChangeEvent,
            ChangeKind,

            // Contact
            ContactRequestDto,
            ContactMessage,

            // Auth
            LoginRequestDto,
            RefreshTokenRequestDto,
            RefreshTokenResponse,
            LogoutRequest,
            LogoutResponse,
            IssuedTokens,
            SessionProfile,

            // Media
            DirectUrlRequest,
            DirectUrlResponse,
            ImagePayload,

            // Admin
            AdminDataset,
            AdminSaveRequest,
            AdminSaveResponse,
            ApprovalRequest,
            ReadFlagRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "portfolio", description = "Public portfolio content"),
        (name = "contact", description = "Visitor contact form"),
        (name = "auth", description = "Administrator sign-in"),
        (name = "media", description = "Image link handling"),
        (name = "admin", description = "Content editing for the site owner"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
