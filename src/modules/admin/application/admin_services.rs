use std::sync::Arc;

use super::domain::AdminEntity;
use super::services::{AdminDatasetLoader, ContentEditor};
use crate::modules::contact::application::ContactService;
use crate::modules::media::application::services::ImageUploader;
use crate::modules::portfolio::application::domain::drafts::{
    AboutDraft, AchievementDraft, CertificateDraft, ExperienceDraft, ProjectDraft, SkillDraft,
    SocialLinkDraft, TestimonialDraft,
};
use crate::modules::portfolio::application::ports::outgoing::ContentStores;

/// One editor per content table plus the dataset the admin page renders.
#[derive(Clone)]
pub struct AdminServices {
    pub projects: Arc<ContentEditor<ProjectDraft>>,
    pub experience: Arc<ContentEditor<ExperienceDraft>>,
    pub skills: Arc<ContentEditor<SkillDraft>>,
    pub certificates: Arc<ContentEditor<CertificateDraft>>,
    pub achievements: Arc<ContentEditor<AchievementDraft>>,
    pub testimonials: Arc<ContentEditor<TestimonialDraft>>,
    pub social_links: Arc<ContentEditor<SocialLinkDraft>>,
    pub about: Arc<ContentEditor<AboutDraft>>,
    pub dataset: Arc<AdminDatasetLoader>,
}

impl AdminServices {
    pub fn new(
        stores: ContentStores,
        uploader: Arc<ImageUploader>,
        contacts: Arc<ContactService>,
    ) -> Self {
        let u = &uploader;
        Self {
            projects: Arc::new(ContentEditor::new(
                stores.projects.clone(),
                u.clone(),
                AdminEntity::Projects.bucket(),
            )),
            experience: Arc::new(ContentEditor::new(
                stores.experience.clone(),
                u.clone(),
                AdminEntity::Experience.bucket(),
            )),
            skills: Arc::new(ContentEditor::new(
                stores.skills.clone(),
                u.clone(),
                AdminEntity::Skills.bucket(),
            )),
            certificates: Arc::new(ContentEditor::new(
                stores.certificates.clone(),
                u.clone(),
                AdminEntity::Certificates.bucket(),
            )),
            achievements: Arc::new(ContentEditor::new(
                stores.achievements.clone(),
                u.clone(),
                AdminEntity::Achievements.bucket(),
            )),
            testimonials: Arc::new(ContentEditor::new(
                stores.testimonials.clone(),
                u.clone(),
                AdminEntity::Testimonials.bucket(),
            )),
            social_links: Arc::new(ContentEditor::new(
                stores.social_links.clone(),
                u.clone(),
                AdminEntity::SocialLinks.bucket(),
            )),
            about: Arc::new(ContentEditor::new(
                stores.about.clone(),
                u.clone(),
                AdminEntity::About.bucket(),
            )),
            dataset: Arc::new(AdminDatasetLoader::new(stores, contacts)),
        }
    }
}
