// src/modules/portfolio/application/ports/outgoing/content_store.rs

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::drafts::{
    AboutDraft, AchievementDraft, CertificateDraft, ContentDraft, ExperienceDraft, ProjectDraft,
    SkillDraft, SocialLinkDraft, TestimonialDraft,
};
use crate::shared::read_outcome::ReadError;

/// Which rows a listing may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Only rows that pass the approval gate.
    Public,
    /// Everything, for the admin dataset.
    All,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentStoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<ContentStoreError> for ReadError {
    fn from(err: ContentStoreError) -> Self {
        match err {
            ContentStoreError::SerializationError(msg) => ReadError::Decode(msg),
            other => ReadError::Store(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Port (one table per implementation, hard deletes)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ContentStore<D>: Send + Sync
where
    D: ContentDraft,
{
    /// Rows in the table's display order.
    async fn list(&self, visibility: Visibility) -> Result<Vec<D::Record>, ContentStoreError>;

    async fn find(&self, id: Uuid) -> Result<Option<D::Record>, ContentStoreError>;

    async fn insert(&self, draft: D) -> Result<D::Record, ContentStoreError>;

    /// Full replacement of the editable fields.
    async fn update(&self, id: Uuid, draft: D) -> Result<D::Record, ContentStoreError>;

    /// `NotFound` when no row was removed.
    async fn delete(&self, id: Uuid) -> Result<(), ContentStoreError>;
}

pub type SharedStore<D> = Arc<dyn ContentStore<D>>;

/// One store per content table.
#[derive(Clone)]
pub struct ContentStores {
    pub projects: SharedStore<ProjectDraft>,
    pub experience: SharedStore<ExperienceDraft>,
    pub skills: SharedStore<SkillDraft>,
    pub certificates: SharedStore<CertificateDraft>,
    pub achievements: SharedStore<AchievementDraft>,
    pub testimonials: SharedStore<TestimonialDraft>,
    pub social_links: SharedStore<SocialLinkDraft>,
    pub about: SharedStore<AboutDraft>,
}
