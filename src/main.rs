pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::config::{AppConfig, ContactTransport};
use crate::modules::admin::application::AdminServices;
use crate::modules::auth::adapter::outgoing::{
    jwt::JwtTokenService, oauth_http_client::HttpOAuthClient,
    profile_query_postgres::ProfileQueryPostgres, security::Argon2Hasher,
    token_blacklist_redis::RedisTokenBlacklist,
};
use crate::modules::auth::application::ports::outgoing::{
    ProfileQuery, TokenBlacklist, TokenProvider,
};
use crate::modules::auth::application::use_cases::{
    login::LoginUseCase, logout::LogoutUseCase, oauth_login::OAuthLoginUseCase,
    refresh_token::RefreshTokenUseCase, session::SessionUseCase,
};
use crate::modules::auth::application::AuthUseCases;
use crate::modules::contact::adapter::outgoing::{
    ContactRepositoryPostgres, HttpContactMailer, SmtpContactMailer,
};
use crate::modules::contact::application::ports::outgoing::ContactMailer;
use crate::modules::contact::application::ContactService;
use crate::modules::media::adapter::outgoing::{GcsImageStorage, HttpImageHost};
use crate::modules::media::application::ports::outgoing::ImageHost;
use crate::modules::media::application::services::{ImageRehoster, ImageUploader};
use crate::modules::media::application::MediaServices;
use crate::modules::portfolio::adapter::outgoing::{
    publishing_stores, AboutStorePostgres, AchievementStorePostgres, BroadcastChangeFeed,
    CertificateStorePostgres, ExperienceStorePostgres, ProjectStorePostgres, SkillStorePostgres,
    SocialLinkStorePostgres, TestimonialStorePostgres,
};
use crate::modules::portfolio::application::ports::outgoing::{ChangeFeed, ContentStores};
use crate::modules::portfolio::application::services::PortfolioFacade;
use crate::modules::portfolio::application::PortfolioServices;
use crate::modules::resume::application::ResumeService;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioServices,
    pub admin: AdminServices,
    pub auth: AuthUseCases,
    pub contact: Arc<ContactService>,
    pub media: MediaServices,
    pub resume: Arc<ResumeService>,
}

fn content_stores(db: &Arc<DatabaseConnection>) -> ContentStores {
    ContentStores {
        projects: Arc::new(ProjectStorePostgres::new(Arc::clone(db))),
        experience: Arc::new(ExperienceStorePostgres::new(Arc::clone(db))),
        skills: Arc::new(SkillStorePostgres::new(Arc::clone(db))),
        certificates: Arc::new(CertificateStorePostgres::new(Arc::clone(db))),
        achievements: Arc::new(AchievementStorePostgres::new(Arc::clone(db))),
        testimonials: Arc::new(TestimonialStorePostgres::new(Arc::clone(db))),
        social_links: Arc::new(SocialLinkStorePostgres::new(Arc::clone(db))),
        about: Arc::new(AboutStorePostgres::new(Arc::clone(db))),
    }
}

fn contact_mailer(transport: &ContactTransport) -> anyhow::Result<Arc<dyn ContactMailer>> {
    let mailer: Arc<dyn ContactMailer> = match transport {
        ContactTransport::Http {
            endpoint_url,
            token,
        } => Arc::new(
            HttpContactMailer::new(endpoint_url, token).context("contact endpoint")?,
        ),
        ContactTransport::Smtp(smtp) => Arc::new(
            SmtpContactMailer::new(smtp).context("smtp transport")?,
        ),
    };
    Ok(mailer)
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // rediss:// connections need a process-wide crypto provider
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        warn!("rustls crypto provider was already installed");
    }

    config::load_env_files();
    let config = AppConfig::from_env().context("configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.context("database connection")?;
    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("redis pool")?;
    let redis_arc = Arc::new(redis_pool);

    // Content
    let feed: Arc<dyn ChangeFeed> = Arc::new(BroadcastChangeFeed::new());
    let stores = publishing_stores(content_stores(&db_arc), feed.clone());
    let facade = Arc::new(PortfolioFacade::new(stores.clone(), config.about_cache_ttl));
    let portfolio = PortfolioServices::new(facade.clone(), feed);

    // Media
    let uploader = Arc::new(ImageUploader::new(Arc::new(GcsImageStorage::new(
        config.storage.clone(),
    ))));
    let image_host: Option<Arc<dyn ImageHost>> = match config.image_host.clone() {
        Some(host_config) => match HttpImageHost::new(host_config) {
            Ok(host) => Some(Arc::new(host)),
            Err(e) => {
                warn!("Image host disabled: {}", e);
                None
            }
        },
        None => None,
    };
    let media = MediaServices {
        uploader: uploader.clone(),
        rehoster: Arc::new(ImageRehoster::new(image_host)),
    };

    // Contact
    let contact = Arc::new(ContactService::new(
        Arc::new(ContactRepositoryPostgres::new(Arc::clone(&db_arc))),
        contact_mailer(&config.contact)?,
    ));

    // Auth
    let token_provider: Arc<dyn TokenProvider> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));
    let profiles: Arc<dyn ProfileQuery> =
        Arc::new(ProfileQueryPostgres::new(Arc::clone(&db_arc)));
    let blacklist: Arc<dyn TokenBlacklist> =
        Arc::new(RedisTokenBlacklist::new(Arc::clone(&redis_arc)));
    let oauth_client =
        HttpOAuthClient::new(config.oauth_providers.clone()).context("oauth providers")?;

    let auth = AuthUseCases {
        login: Arc::new(LoginUseCase::new(
            profiles.clone(),
            Arc::new(Argon2Hasher::from_env()),
            token_provider.clone(),
        )),
        refresh: Arc::new(RefreshTokenUseCase::new(
            token_provider.clone(),
            blacklist.clone(),
        )),
        logout: Arc::new(LogoutUseCase::new(token_provider.clone(), blacklist)),
        session: Arc::new(SessionUseCase::new(profiles.clone())),
        oauth: Arc::new(OAuthLoginUseCase::new(
            Arc::new(oauth_client),
            profiles,
            token_provider.clone(),
        )),
    };

    let state = AppState {
        admin: AdminServices::new(stores, uploader, contact.clone()),
        resume: Arc::new(ResumeService::new(facade)),
        portfolio,
        auth,
        contact,
        media,
    };

    let realtime = state.portfolio.realtime.clone();
    realtime.start().await;

    info!("Server run on: {}", server_url);

    let db_for_server = Arc::clone(&db_arc);
    let result = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await;

    realtime.shutdown();
    result.context("http server")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{admin, auth, contact, media, portfolio, resume};

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public content
    cfg.service(portfolio::adapter::incoming::web::routes::get_project_tags_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::get_certificates_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::get_certificate_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::get_achievements_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::get_testimonials_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::submit_testimonial_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::get_social_links_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::get_about_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::get_page_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::realtime_events_handler);
    cfg.service(resume::adapter::incoming::web::routes::download_resume_handler);
    cfg.service(contact::adapter::incoming::web::routes::submit_contact_handler);
    // Auth
    cfg.service(auth::adapter::incoming::web::routes::login_handler);
    cfg.service(auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(auth::adapter::incoming::web::routes::logout_handler);
    cfg.service(auth::adapter::incoming::web::routes::session_handler);
    cfg.service(auth::adapter::incoming::web::routes::oauth_callback_handler);
    cfg.service(auth::adapter::incoming::web::routes::oauth_begin_handler);
    // Media
    cfg.service(media::adapter::incoming::web::routes::direct_url_handler);
    // Admin: fixed paths before the `{entity}` routes
    cfg.service(admin::adapter::incoming::web::routes::dashboard_handler);
    cfg.service(admin::adapter::incoming::web::routes::list_contacts_handler);
    cfg.service(admin::adapter::incoming::web::routes::set_contact_read_handler);
    cfg.service(admin::adapter::incoming::web::routes::delete_contact_handler);
    cfg.service(admin::adapter::incoming::web::routes::set_approval_handler);
    cfg.service(admin::adapter::incoming::web::routes::load_draft_handler);
    cfg.service(admin::adapter::incoming::web::routes::remove_image_handler);
    cfg.service(admin::adapter::incoming::web::routes::create_content_handler);
    cfg.service(admin::adapter::incoming::web::routes::update_content_handler);
    cfg.service(admin::adapter::incoming::web::routes::delete_content_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
