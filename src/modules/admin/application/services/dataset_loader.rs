use std::sync::Arc;
use tracing::error;

use crate::modules::admin::application::domain::AdminDataset;
use crate::modules::contact::application::ContactService;
use crate::modules::portfolio::application::ports::outgoing::{ContentStores, Visibility};
use crate::shared::read_outcome::ReadError;

/// Re-reads every admin collection in one go. Any failed read fails the load.
pub struct AdminDatasetLoader {
    stores: ContentStores,
    contacts: Arc<ContactService>,
}

impl AdminDatasetLoader {
    pub fn new(stores: ContentStores, contacts: Arc<ContactService>) -> Self {
        Self { stores, contacts }
    }

    pub async fn load(&self) -> Result<AdminDataset, ReadError> {
        let s = &self.stores;

        let collections = futures::try_join!(
            s.projects.list(Visibility::All),
            s.experience.list(Visibility::All),
            s.skills.list(Visibility::All),
            s.certificates.list(Visibility::All),
            s.achievements.list(Visibility::All),
            s.testimonials.list(Visibility::All),
            s.social_links.list(Visibility::All),
            s.about.list(Visibility::All),
        );

        let (projects, experience, skills, certificates, achievements, testimonials, social_links, about) =
            collections.map_err(|e| {
                error!(error = %e, "Failed to load admin dataset");
                ReadError::from(e)
            })?;

        let contacts = self.contacts.list().await.map_err(|e| {
            error!(error = %e, "Failed to load contact messages");
            ReadError::Store(e.to_string())
        })?;

        Ok(AdminDataset {
            projects,
            experience,
            skills,
            certificates,
            achievements,
            testimonials,
            social_links,
            about: about.into_iter().next(),
            contacts,
        })
    }
}
