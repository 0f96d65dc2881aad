use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::entities::{
    AboutSection, Achievement, Certificate, CertificateType, ContentTable, Experience,
    ExperienceType, Project, SocialLink, Skill, Testimonial,
};
use crate::shared::dates::{flexible_date, optional_flexible_date};

//
// ──────────────────────────────────────────────────────────
// Record / draft contracts
// ──────────────────────────────────────────────────────────
//

/// A stored row as the rest of the application sees it.
pub trait ContentRecord: Clone + Send + Sync + Serialize + 'static {
    const TABLE: ContentTable;

    fn id(&self) -> Uuid;

    fn image_url(&self) -> Option<&str> {
        None
    }

    /// Rows behind an approval gate override this.
    fn is_public(&self) -> bool {
        true
    }
}

/// The editable field set of a record. Insert and update both take a full draft.
pub trait ContentDraft: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    type Record: ContentRecord;

    /// Edit mode starts from a copy of the stored record.
    fn from_record(record: &Self::Record) -> Self;

    fn validate(&self) -> Result<(), DraftError>;

    fn image_url(&self) -> Option<&str> {
        None
    }

    fn set_image_url(&mut self, _url: Option<String>) {}
}

/// Drafts whose record sits behind the approval gate.
pub trait Approvable {
    fn set_approved(&mut self, approved: bool);
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i16,
        max: i16,
    },

    #[error("{0} must not be before the start date")]
    EndsBeforeStart(&'static str),
}

fn require(field: &'static str, value: &str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        Err(DraftError::Missing(field))
    } else {
        Ok(())
    }
}

fn in_range(field: &'static str, value: i16, min: i16, max: i16) -> Result<(), DraftError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(DraftError::OutOfRange { field, min, max })
    }
}

/// Blank strings from form fields are stored as NULL.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl ContentRecord for Project {
    const TABLE: ContentTable = ContentTable::Projects;

    fn id(&self) -> Uuid {
        self.id
    }

    fn image_url(&self) -> Option<&str> {
        non_blank(&self.image_url)
    }
}

impl ContentDraft for ProjectDraft {
    type Record = Project;

    fn from_record(record: &Project) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            image_url: record.image_url.clone(),
            tags: record.tags.clone(),
            link: record.link.clone(),
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        require("title", &self.title)?;
        require("description", &self.description)
    }

    fn image_url(&self) -> Option<&str> {
        non_blank(&self.image_url)
    }

    fn set_image_url(&mut self, url: Option<String>) {
        self.image_url = url;
    }
}

//
// ──────────────────────────────────────────────────────────
// Experience
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExperienceDraft {
    pub position: String,
    pub organization: String,
    #[serde(with = "flexible_date")]
    pub start_date: NaiveDate,
    #[serde(default, with = "optional_flexible_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub experience_type: ExperienceType,
}

impl ContentRecord for Experience {
    const TABLE: ContentTable = ContentTable::Experiences;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl ContentDraft for ExperienceDraft {
    type Record = Experience;

    fn from_record(record: &Experience) -> Self {
        Self {
            position: record.position.clone(),
            organization: record.organization.clone(),
            start_date: record.start_date,
            end_date: record.end_date,
            description: record.description.clone(),
            experience_type: record.experience_type,
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        require("position", &self.position)?;
        require("organization", &self.organization)?;
        match self.end_date {
            Some(end) if end < self.start_date => Err(DraftError::EndsBeforeStart("end_date")),
            _ => Ok(()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Skills
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SkillDraft {
    pub name: String,
    pub category: String,
    pub level: i16,
}

impl ContentRecord for Skill {
    const TABLE: ContentTable = ContentTable::Skills;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl ContentDraft for SkillDraft {
    type Record = Skill;

    fn from_record(record: &Skill) -> Self {
        Self {
            name: record.name.clone(),
            category: record.category.clone(),
            level: record.level,
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        require("name", &self.name)?;
        require("category", &self.category)?;
        in_range("level", self.level, 1, 100)
    }
}

//
// ──────────────────────────────────────────────────────────
// Certificates
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CertificateDraft {
    pub title: String,
    pub issuer: String,
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(rename = "type")]
    pub certificate_type: CertificateType,
}

impl ContentRecord for Certificate {
    const TABLE: ContentTable = ContentTable::Certificates;

    fn id(&self) -> Uuid {
        self.id
    }

    fn image_url(&self) -> Option<&str> {
        non_blank(&self.image_url)
    }
}

impl ContentDraft for CertificateDraft {
    type Record = Certificate;

    fn from_record(record: &Certificate) -> Self {
        Self {
            title: record.title.clone(),
            issuer: record.issuer.clone(),
            date: record.date,
            description: record.description.clone(),
            image_url: record.image_url.clone(),
            certificate_type: record.certificate_type,
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        require("title", &self.title)?;
        require("issuer", &self.issuer)
    }

    fn image_url(&self) -> Option<&str> {
        non_blank(&self.image_url)
    }

    fn set_image_url(&mut self, url: Option<String>) {
        self.image_url = url;
    }
}

//
// ──────────────────────────────────────────────────────────
// Achievements
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AchievementDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub awarded_by: Option<String>,
}

impl ContentRecord for Achievement {
    const TABLE: ContentTable = ContentTable::Achievements;

    fn id(&self) -> Uuid {
        self.id
    }

    fn image_url(&self) -> Option<&str> {
        non_blank(&self.image_url)
    }

    fn is_public(&self) -> bool {
        self.is_approved
    }
}

impl ContentDraft for AchievementDraft {
    type Record = Achievement;

    fn from_record(record: &Achievement) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            date: record.date,
            image_url: record.image_url.clone(),
            is_approved: record.is_approved,
            awarded_by: record.awarded_by.clone(),
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        require("title", &self.title)
    }

    fn image_url(&self) -> Option<&str> {
        non_blank(&self.image_url)
    }

    fn set_image_url(&mut self, url: Option<String>) {
        self.image_url = url;
    }
}

impl Approvable for AchievementDraft {
    fn set_approved(&mut self, approved: bool) {
        self.is_approved = approved;
    }
}

//
// ──────────────────────────────────────────────────────────
// Testimonials
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TestimonialDraft {
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub content: String,
    pub rating: i16,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
}

impl ContentRecord for Testimonial {
    const TABLE: ContentTable = ContentTable::Testimonials;

    fn id(&self) -> Uuid {
        self.id
    }

    fn image_url(&self) -> Option<&str> {
        non_blank(&self.image_url)
    }

    fn is_public(&self) -> bool {
        self.is_approved
    }
}

impl ContentDraft for TestimonialDraft {
    type Record = Testimonial;

    fn from_record(record: &Testimonial) -> Self {
        Self {
            name: record.name.clone(),
            position: record.position.clone(),
            company: record.company.clone(),
            content: record.content.clone(),
            rating: record.rating,
            image_url: record.image_url.clone(),
            is_approved: record.is_approved,
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        require("name", &self.name)?;
        require("content", &self.content)?;
        in_range("rating", self.rating, 1, 5)
    }

    fn image_url(&self) -> Option<&str> {
        non_blank(&self.image_url)
    }

    fn set_image_url(&mut self, url: Option<String>) {
        self.image_url = url;
    }
}

impl Approvable for TestimonialDraft {
    fn set_approved(&mut self, approved: bool) {
        self.is_approved = approved;
    }
}

//
// ──────────────────────────────────────────────────────────
// Social links
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SocialLinkDraft {
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

impl ContentRecord for SocialLink {
    const TABLE: ContentTable = ContentTable::SocialLinks;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl ContentDraft for SocialLinkDraft {
    type Record = SocialLink;

    fn from_record(record: &SocialLink) -> Self {
        Self {
            platform: record.platform.clone(),
            url: record.url.clone(),
            icon: record.icon.clone(),
            label: record.label.clone(),
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        require("platform", &self.platform)?;
        require("url", &self.url)
    }
}

//
// ──────────────────────────────────────────────────────────
// About
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AboutDraft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub footer_bio: Option<String>,
}

impl ContentRecord for AboutSection {
    const TABLE: ContentTable = ContentTable::AboutSections;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl ContentDraft for AboutDraft {
    type Record = AboutSection;

    fn from_record(record: &AboutSection) -> Self {
        Self {
            title: record.title.clone(),
            content: record.content.clone(),
            tagline: record.tagline.clone(),
            footer_bio: record.footer_bio.clone(),
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        require("title", &self.title)?;
        require("content", &self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_level_outside_scale_is_rejected() {
        let draft = SkillDraft {
            name: "Rust".into(),
            category: "Languages".into(),
            level: 0,
        };
        assert_eq!(
            draft.validate(),
            Err(DraftError::OutOfRange {
                field: "level",
                min: 1,
                max: 100
            })
        );
    }

    #[test]
    fn testimonial_rating_must_be_one_to_five() {
        let mut draft = TestimonialDraft {
            name: "Ana".into(),
            position: None,
            company: None,
            content: "Great".into(),
            rating: 6,
            image_url: None,
            is_approved: false,
        };
        assert!(draft.validate().is_err());

        draft.rating = 5;
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn blank_title_is_missing() {
        let draft = ProjectDraft {
            title: "   ".into(),
            description: "d".into(),
            image_url: None,
            tags: vec![],
            link: None,
        };
        assert_eq!(draft.validate(), Err(DraftError::Missing("title")));
    }

    #[test]
    fn experience_cannot_end_before_it_starts() {
        let draft: ExperienceDraft = serde_json::from_str(
            r#"{"position":"Dev","organization":"Acme","start_date":"2022-05","end_date":"2021-01-01","type":"work"}"#,
        )
        .unwrap();
        assert_eq!(
            draft.validate(),
            Err(DraftError::EndsBeforeStart("end_date"))
        );
    }

    #[test]
    fn certificate_draft_accepts_string_dates() {
        let draft: CertificateDraft = serde_json::from_str(
            r#"{"title":"AWS","issuer":"Amazon","date":"March 2023","type":"course"}"#,
        )
        .unwrap();
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
        assert_eq!(draft.certificate_type, CertificateType::Course);
    }

    #[test]
    fn blank_image_url_counts_as_none() {
        let draft = ProjectDraft {
            title: "t".into(),
            description: "d".into(),
            image_url: Some("  ".into()),
            tags: vec![],
            link: None,
        };
        assert_eq!(ContentDraft::image_url(&draft), None);
    }

    #[test]
    fn edit_mode_copies_the_record() {
        let record = Achievement {
            id: Uuid::new_v4(),
            title: "Hackathon".into(),
            description: "1st place".into(),
            date: NaiveDate::from_ymd_opt(2023, 9, 9).unwrap(),
            image_url: Some("https://cdn/x.jpg".into()),
            is_approved: true,
            awarded_by: Some("ACM".into()),
        };

        let draft = AchievementDraft::from_record(&record);
        assert_eq!(draft.title, "Hackathon");
        assert!(draft.is_approved);
        assert_eq!(ContentDraft::image_url(&draft), Some("https://cdn/x.jpg"));
    }
}
