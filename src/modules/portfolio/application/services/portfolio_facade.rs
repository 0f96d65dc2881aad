use std::time::Duration;
use tracing::{debug, error};
use uuid::Uuid;

use super::ttl_cache::TtlCache;
use crate::modules::portfolio::application::domain::drafts::{ContentDraft, ContentRecord};
use crate::modules::portfolio::application::domain::entities::{
    AboutSection, Achievement, Certificate, Experience, Project, SocialLink, Skill, Testimonial,
};
use crate::modules::portfolio::application::ports::outgoing::{
    ContentStores, SharedStore, Visibility,
};
use crate::shared::read_outcome::{ReadError, ReadOutcome};

pub const DEFAULT_ABOUT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Read side of the site. Every read reports through `ReadOutcome`, and
/// failures are logged here so callers only decide how to render them.
pub struct PortfolioFacade {
    stores: ContentStores,
    about_cache: TtlCache<Option<AboutSection>>,
}

impl PortfolioFacade {
    pub fn new(stores: ContentStores, about_ttl: Duration) -> Self {
        Self {
            stores,
            about_cache: TtlCache::new(about_ttl),
        }
    }

    pub fn stores(&self) -> &ContentStores {
        &self.stores
    }

    pub async fn get_projects(&self) -> ReadOutcome<Vec<Project>> {
        read_collection(&self.stores.projects, Visibility::Public).await
    }

    /// Most recent start date first, whatever order the store returns.
    pub async fn get_experience(&self) -> ReadOutcome<Vec<Experience>> {
        read_collection(&self.stores.experience, Visibility::Public)
            .await
            .map(|mut items| {
                items.sort_by(|a, b| b.start_date.cmp(&a.start_date));
                items
            })
    }

    pub async fn get_skills(&self) -> ReadOutcome<Vec<Skill>> {
        read_collection(&self.stores.skills, Visibility::Public).await
    }

    pub async fn get_certificates(&self) -> ReadOutcome<Vec<Certificate>> {
        read_collection(&self.stores.certificates, Visibility::Public).await
    }

    pub async fn get_certificate(&self, id: Uuid) -> ReadOutcome<Certificate> {
        match self.stores.certificates.find(id).await {
            Ok(found) => ReadOutcome::from_option(found),
            Err(e) => {
                error!("Failed to load certificate {}: {}", id, e);
                ReadOutcome::Failed(e.into())
            }
        }
    }

    pub async fn get_achievements(&self) -> ReadOutcome<Vec<Achievement>> {
        read_collection(&self.stores.achievements, Visibility::Public).await
    }

    pub async fn get_testimonials(&self) -> ReadOutcome<Vec<Testimonial>> {
        read_collection(&self.stores.testimonials, Visibility::Public).await
    }

    pub async fn get_social_links(&self) -> ReadOutcome<Vec<SocialLink>> {
        read_collection(&self.stores.social_links, Visibility::Public).await
    }

    /// The single about row. Always goes to the store.
    pub async fn get_about(&self) -> ReadOutcome<AboutSection> {
        match self.load_about().await {
            Ok(about) => ReadOutcome::from_option(about),
            Err(e) => ReadOutcome::Failed(e),
        }
    }

    /// Served from the TTL cache when fresh. A failed load is not cached.
    pub async fn get_about_cached(&self) -> ReadOutcome<AboutSection> {
        match self.about_cache.get_or_load(|| self.load_about()).await {
            Ok(about) => ReadOutcome::from_option(about),
            Err(e) => ReadOutcome::Failed(e),
        }
    }

    pub async fn invalidate_about(&self) {
        debug!("about cache invalidated");
        self.about_cache.invalidate().await;
    }

    async fn load_about(&self) -> Result<Option<AboutSection>, ReadError> {
        match self.stores.about.list(Visibility::Public).await {
            Ok(rows) => Ok(rows.into_iter().next()),
            Err(e) => {
                error!("Failed to load about section: {}", e);
                Err(e.into())
            }
        }
    }
}

/// Rows behind the approval gate are filtered again in memory, so a store that
/// ignores `Visibility` still never leaks them.
async fn read_collection<D>(
    store: &SharedStore<D>,
    visibility: Visibility,
) -> ReadOutcome<Vec<D::Record>>
where
    D: ContentDraft,
{
    let table = <D::Record as ContentRecord>::TABLE;

    match store.list(visibility).await {
        Ok(rows) => {
            let rows: Vec<D::Record> = match visibility {
                Visibility::Public => rows.into_iter().filter(|r| r.is_public()).collect(),
                Visibility::All => rows,
            };
            debug!("loaded {} rows from {}", rows.len(), table);
            ReadOutcome::from_collection(rows)
        }
        Err(e) => {
            error!("Failed to load {}: {}", table, e);
            ReadOutcome::Failed(e.into())
        }
    }
}
