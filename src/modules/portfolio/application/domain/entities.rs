use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::dates::format_period;

//
// ──────────────────────────────────────────────────────────
// Tables
// ──────────────────────────────────────────────────────────
//

/// Every table the change feed can report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentTable {
    Projects,
    Experiences,
    Skills,
    Certificates,
    Achievements,
    Testimonials,
    SocialLinks,
    AboutSections,
}

impl ContentTable {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentTable::Projects => "projects",
            ContentTable::Experiences => "experiences",
            ContentTable::Skills => "skills",
            ContentTable::Certificates => "certificates",
            ContentTable::Achievements => "achievements",
            ContentTable::Testimonials => "testimonials",
            ContentTable::SocialLinks => "social_links",
            ContentTable::AboutSections => "about_sections",
        }
    }
}

impl fmt::Display for ContentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ──────────────────────────────────────────────────────────
// Enumerations stored as text
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceType {
    Work,
    Education,
    Volunteer,
}

impl ExperienceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceType::Work => "work",
            ExperienceType::Education => "education",
            ExperienceType::Volunteer => "volunteer",
        }
    }
}

impl FromStr for ExperienceType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "work" => Ok(ExperienceType::Work),
            "education" => Ok(ExperienceType::Education),
            "volunteer" => Ok(ExperienceType::Volunteer),
            _ => Err(UnknownVariant {
                kind: "experience type",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CertificateType {
    Event,
    Course,
}

impl CertificateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateType::Event => "event",
            CertificateType::Course => "course",
        }
    }
}

impl FromStr for CertificateType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "event" => Ok(CertificateType::Event),
            "course" => Ok(CertificateType::Course),
            _ => Err(UnknownVariant {
                kind: "certificate type",
                value: s.to_string(),
            }),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Display order is significant.
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: Uuid,
    pub position: String,
    pub organization: String,
    pub start_date: NaiveDate,
    /// `None` means the position is ongoing.
    pub end_date: Option<NaiveDate>,
    pub description: String,
    #[serde(rename = "type")]
    pub experience_type: ExperienceType,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }

    pub fn period_label(&self) -> String {
        format_period(self.start_date, self.end_date)
    }
}

/// `level` is stored on a 1–100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub level: i16,
}

impl Skill {
    /// 1–5 view of the level used by the compact skill cards.
    pub fn stars(&self) -> u8 {
        let clamped = self.level.clamp(1, 100) as u16;
        clamped.div_ceil(20) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Certificate {
    pub id: Uuid,
    pub title: String,
    pub issuer: String,
    pub date: NaiveDate,
    pub description: String,
    pub image_url: Option<String>,
    #[serde(rename = "type")]
    pub certificate_type: CertificateType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Achievement {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub image_url: Option<String>,
    pub is_approved: bool,
    pub awarded_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub position: Option<String>,
    pub company: Option<String>,
    pub content: String,
    pub rating: i16,
    pub image_url: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SocialLink {
    pub id: Uuid,
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AboutSection {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tagline: Option<String>,
    pub footer_bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(level: i16) -> Skill {
        Skill {
            id: Uuid::new_v4(),
            name: "Rust".into(),
            category: "Languages".into(),
            level,
        }
    }

    #[test]
    fn stars_scale_percent_levels() {
        assert_eq!(skill(1).stars(), 1);
        assert_eq!(skill(20).stars(), 1);
        assert_eq!(skill(21).stars(), 2);
        assert_eq!(skill(100).stars(), 5);
        assert_eq!(skill(250).stars(), 5);
    }

    #[test]
    fn experience_type_parses_case_insensitively() {
        assert_eq!("Work".parse::<ExperienceType>(), Ok(ExperienceType::Work));
        assert!("hobby".parse::<ExperienceType>().is_err());
    }

    #[test]
    fn experience_serializes_type_field() {
        let exp = Experience {
            id: Uuid::nil(),
            position: "Engineer".into(),
            organization: "Acme".into(),
            start_date: NaiveDate::from_ymd_opt(2021, 5, 1).unwrap(),
            end_date: None,
            description: String::new(),
            experience_type: ExperienceType::Volunteer,
        };

        let json = serde_json::to_value(&exp).unwrap();
        assert_eq!(json["type"], "volunteer");
        assert_eq!(json["start_date"], "2021-05-01");
        assert!(exp.is_current());
        assert_eq!(exp.period_label(), "May 2021 - Present");
    }

    #[test]
    fn project_tag_match_ignores_case() {
        let project = Project {
            id: Uuid::nil(),
            title: "t".into(),
            description: "d".into(),
            image_url: None,
            tags: vec!["Rust".into(), "WebAssembly".into()],
            link: None,
            created_at: Utc::now(),
        };
        assert!(project.has_tag("rust"));
        assert!(!project.has_tag("go"));
    }
}
