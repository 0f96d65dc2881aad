use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::drafts::{
    AboutDraft, AchievementDraft, CertificateDraft, ContentDraft, ContentRecord, ExperienceDraft,
    ProjectDraft, SkillDraft, SocialLinkDraft, TestimonialDraft,
};
use crate::modules::portfolio::application::domain::entities::{
    AboutSection, Achievement, Certificate, Experience, Project, SocialLink, Skill, Testimonial,
};
use crate::modules::portfolio::application::ports::outgoing::{
    ContentStore, ContentStoreError, Visibility,
};

/// Builds the stored record a draft turns into.
pub trait Materialize: ContentDraft {
    fn materialize(&self, id: Uuid) -> Self::Record;
}

/// In-memory `ContentStore` with failure switches and call counters.
pub struct MemoryStore<D>
where
    D: Materialize,
{
    rows: Mutex<Vec<D::Record>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    list_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl<D> MemoryStore<D>
where
    D: Materialize,
{
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<D::Record>) -> Self {
        Self {
            rows: Mutex::new(rows),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            list_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<D::Record> {
        self.rows.lock().unwrap().clone()
    }

    pub fn push(&self, record: D::Record) {
        self.rows.lock().unwrap().push(record);
    }

    fn check(&self, flag: &AtomicBool) -> Result<(), ContentStoreError> {
        if flag.load(Ordering::SeqCst) {
            Err(ContentStoreError::DatabaseError("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

impl<D> Default for MemoryStore<D>
where
    D: Materialize,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<D> ContentStore<D> for MemoryStore<D>
where
    D: Materialize,
{
    async fn list(&self, visibility: Visibility) -> Result<Vec<D::Record>, ContentStoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check(&self.fail_reads)?;

        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| visibility == Visibility::All || r.is_public())
            .cloned()
            .collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<D::Record>, ContentStoreError> {
        self.check(&self.fail_reads)?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, draft: D) -> Result<D::Record, ContentStoreError> {
        self.check(&self.fail_writes)?;
        let record = draft.materialize(Uuid::new_v4());
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, draft: D) -> Result<D::Record, ContentStoreError> {
        self.check(&self.fail_writes)?;
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(ContentStoreError::NotFound)?;
        *slot = draft.materialize(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentStoreError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check(&self.fail_writes)?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        if rows.len() == before {
            Err(ContentStoreError::NotFound)
        } else {
            Ok(())
        }
    }
}

// ────────────────────────────────────────────────────────────
// Materialize impls
// ────────────────────────────────────────────────────────────

impl Materialize for ProjectDraft {
    fn materialize(&self, id: Uuid) -> Project {
        Project {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            tags: self.tags.clone(),
            link: self.link.clone(),
            created_at: Utc::now(),
        }
    }
}

impl Materialize for ExperienceDraft {
    fn materialize(&self, id: Uuid) -> Experience {
        Experience {
            id,
            position: self.position.clone(),
            organization: self.organization.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description.clone(),
            experience_type: self.experience_type,
        }
    }
}

impl Materialize for SkillDraft {
    fn materialize(&self, id: Uuid) -> Skill {
        Skill {
            id,
            name: self.name.clone(),
            category: self.category.clone(),
            level: self.level,
        }
    }
}

impl Materialize for CertificateDraft {
    fn materialize(&self, id: Uuid) -> Certificate {
        Certificate {
            id,
            title: self.title.clone(),
            issuer: self.issuer.clone(),
            date: self.date,
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            certificate_type: self.certificate_type,
        }
    }
}

impl Materialize for AchievementDraft {
    fn materialize(&self, id: Uuid) -> Achievement {
        Achievement {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date,
            image_url: self.image_url.clone(),
            is_approved: self.is_approved,
            awarded_by: self.awarded_by.clone(),
        }
    }
}

impl Materialize for TestimonialDraft {
    fn materialize(&self, id: Uuid) -> Testimonial {
        Testimonial {
            id,
            name: self.name.clone(),
            position: self.position.clone(),
            company: self.company.clone(),
            content: self.content.clone(),
            rating: self.rating,
            image_url: self.image_url.clone(),
            is_approved: self.is_approved,
            created_at: Utc::now(),
        }
    }
}

impl Materialize for SocialLinkDraft {
    fn materialize(&self, id: Uuid) -> SocialLink {
        SocialLink {
            id,
            platform: self.platform.clone(),
            url: self.url.clone(),
            icon: self.icon.clone(),
            label: self.label.clone(),
        }
    }
}

impl Materialize for AboutDraft {
    fn materialize(&self, id: Uuid) -> AboutSection {
        AboutSection {
            id,
            title: self.title.clone(),
            content: self.content.clone(),
            tagline: self.tagline.clone(),
            footer_bio: self.footer_bio.clone(),
        }
    }
}
