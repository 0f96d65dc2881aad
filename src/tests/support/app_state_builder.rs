use std::sync::Arc;

use actix_web::web;

use crate::modules::admin::application::AdminServices;
use crate::modules::auth::adapter::outgoing::security::Argon2Hasher;
use crate::modules::auth::application::use_cases::{
    login::{ILoginUseCase, LoginUseCase},
    logout::{ILogoutUseCase, LogoutUseCase},
    oauth_login::{IOAuthLoginUseCase, OAuthLoginUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    session::{ISessionUseCase, SessionUseCase},
};
use crate::modules::auth::application::AuthUseCases;
use crate::modules::contact::application::ContactService;
use crate::modules::media::application::ports::outgoing::ImageHost;
use crate::modules::media::application::services::{ImageRehoster, ImageUploader};
use crate::modules::media::application::MediaServices;
use crate::modules::portfolio::adapter::outgoing::{publishing_stores, BroadcastChangeFeed};
use crate::modules::portfolio::application::domain::drafts::{
    AboutDraft, AchievementDraft, CertificateDraft, ExperienceDraft, ProjectDraft, SkillDraft,
    SocialLinkDraft, TestimonialDraft,
};
use crate::modules::portfolio::application::ports::outgoing::{ChangeFeed, ContentStores};
use crate::modules::portfolio::application::services::{PortfolioFacade, DEFAULT_ABOUT_CACHE_TTL};
use crate::modules::portfolio::application::PortfolioServices;
use crate::modules::resume::application::ResumeService;
use crate::tests::support::auth_helper::test_jwt_service;
use crate::tests::support::fixtures;
use crate::tests::support::memory_store::MemoryStore;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every collaborator defaults to an empty in-memory double. Tests swap in
/// the one they exercise and keep their own handle to inspect it.
pub struct TestAppStateBuilder {
    stores: ContentStores,
    login: Arc<dyn ILoginUseCase>,
    refresh: Arc<dyn IRefreshTokenUseCase>,
    logout: Arc<dyn ILogoutUseCase>,
    session: Arc<dyn ISessionUseCase>,
    oauth: Arc<dyn IOAuthLoginUseCase>,
    image_storage: Arc<MemoryImageStorage>,
    image_host: Option<Arc<StubImageHost>>,
    contact_repository: Arc<MemoryContactRepository>,
    contact_mailer: Arc<RecordingContactMailer>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let tokens = Arc::new(test_jwt_service());
        let profiles = Arc::new(MemoryProfileQuery::default());
        let blacklist = Arc::new(MemoryTokenBlacklist::default());

        Self {
            stores: fixtures::empty_stores(),
            login: Arc::new(LoginUseCase::new(
                profiles.clone(),
                Arc::new(Argon2Hasher::new()),
                tokens.clone(),
            )),
            refresh: Arc::new(RefreshTokenUseCase::new(tokens.clone(), blacklist.clone())),
            logout: Arc::new(LogoutUseCase::new(tokens.clone(), blacklist)),
            session: Arc::new(SessionUseCase::new(profiles.clone())),
            oauth: Arc::new(OAuthLoginUseCase::new(
                Arc::new(StubOAuthClient::returning("owner@example.com")),
                profiles,
                tokens,
            )),
            image_storage: Arc::new(MemoryImageStorage::default()),
            image_host: None,
            contact_repository: Arc::new(MemoryContactRepository::default()),
            contact_mailer: Arc::new(RecordingContactMailer::default()),
        }
    }
}

impl TestAppStateBuilder {
    // ---------- content ----------

    pub fn with_projects(mut self, store: Arc<MemoryStore<ProjectDraft>>) -> Self {
        self.stores.projects = store;
        self
    }

    pub fn with_experience(mut self, store: Arc<MemoryStore<ExperienceDraft>>) -> Self {
        self.stores.experience = store;
        self
    }

    pub fn with_skills(mut self, store: Arc<MemoryStore<SkillDraft>>) -> Self {
        self.stores.skills = store;
        self
    }

    pub fn with_certificates(mut self, store: Arc<MemoryStore<CertificateDraft>>) -> Self {
        self.stores.certificates = store;
        self
    }

    pub fn with_achievements(mut self, store: Arc<MemoryStore<AchievementDraft>>) -> Self {
        self.stores.achievements = store;
        self
    }

    pub fn with_testimonials(mut self, store: Arc<MemoryStore<TestimonialDraft>>) -> Self {
        self.stores.testimonials = store;
        self
    }

    pub fn with_social_links(mut self, store: Arc<MemoryStore<SocialLinkDraft>>) -> Self {
        self.stores.social_links = store;
        self
    }

    pub fn with_about(mut self, store: Arc<MemoryStore<AboutDraft>>) -> Self {
        self.stores.about = store;
        self
    }

    // ---------- auth ----------

    pub fn with_login(mut self, use_case: impl ILoginUseCase + 'static) -> Self {
        self.login = Arc::new(use_case);
        self
    }

    pub fn with_refresh(mut self, use_case: impl IRefreshTokenUseCase + 'static) -> Self {
        self.refresh = Arc::new(use_case);
        self
    }

    pub fn with_logout(mut self, use_case: impl ILogoutUseCase + 'static) -> Self {
        self.logout = Arc::new(use_case);
        self
    }

    pub fn with_session(mut self, use_case: impl ISessionUseCase + 'static) -> Self {
        self.session = Arc::new(use_case);
        self
    }

    pub fn with_oauth(mut self, use_case: impl IOAuthLoginUseCase + 'static) -> Self {
        self.oauth = Arc::new(use_case);
        self
    }

    // ---------- media / contact ----------

    pub fn with_image_storage(mut self, storage: Arc<MemoryImageStorage>) -> Self {
        self.image_storage = storage;
        self
    }

    pub fn with_image_host(mut self, host: Arc<StubImageHost>) -> Self {
        self.image_host = Some(host);
        self
    }

    pub fn with_contact_repository(mut self, repository: Arc<MemoryContactRepository>) -> Self {
        self.contact_repository = repository;
        self
    }

    pub fn with_contact_mailer(mut self, mailer: Arc<RecordingContactMailer>) -> Self {
        self.contact_mailer = mailer;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let feed: Arc<dyn ChangeFeed> = Arc::new(BroadcastChangeFeed::new());
        let stores = publishing_stores(self.stores, feed.clone());

        let facade = Arc::new(PortfolioFacade::new(stores.clone(), DEFAULT_ABOUT_CACHE_TTL));
        let uploader = Arc::new(ImageUploader::new(self.image_storage));
        let host = self.image_host.map(|h| h as Arc<dyn ImageHost>);
        let contact = Arc::new(ContactService::new(
            self.contact_repository,
            self.contact_mailer,
        ));

        web::Data::new(AppState {
            portfolio: PortfolioServices::new(facade.clone(), feed),
            admin: AdminServices::new(stores, uploader.clone(), contact.clone()),
            auth: AuthUseCases {
                login: self.login,
                refresh: self.refresh,
                logout: self.logout,
                session: self.session,
                oauth: self.oauth,
            },
            contact,
            media: MediaServices {
                uploader,
                rehoster: Arc::new(ImageRehoster::new(host)),
            },
            resume: Arc::new(ResumeService::new(facade)),
        })
    }
}
