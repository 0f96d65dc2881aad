use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::portfolio::application::domain::entities::{
    Certificate, CertificateType, Experience, ExperienceType, Project, SocialLink, Skill,
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// Categories keep the order in which they first appear.
pub fn group_skills(skills: Vec<Skill>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: skill.category.clone(),
                skills: vec![skill],
            }),
        }
    }

    groups
}

pub fn filter_experience(items: Vec<Experience>, kind: Option<ExperienceType>) -> Vec<Experience> {
    match kind {
        Some(kind) => items
            .into_iter()
            .filter(|e| e.experience_type == kind)
            .collect(),
        None => items,
    }
}

pub fn filter_certificates(
    items: Vec<Certificate>,
    kind: Option<CertificateType>,
) -> Vec<Certificate> {
    match kind {
        Some(kind) => items
            .into_iter()
            .filter(|c| c.certificate_type == kind)
            .collect(),
        None => items,
    }
}

/// Blank or missing tag means no filtering.
pub fn filter_projects_by_tag(items: Vec<Project>, tag: Option<&str>) -> Vec<Project> {
    match tag.map(str::trim).filter(|t| !t.is_empty()) {
        Some(tag) => items.into_iter().filter(|p| p.has_tag(tag)).collect(),
        None => items,
    }
}

/// Case-insensitive distinct tags, first spelling wins.
pub fn distinct_tags(items: &[Project]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for tag in items.iter().flat_map(|p| p.tags.iter()) {
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            tags.push(tag.clone());
        }
    }

    tags
}

pub const FALLBACK_ICON: &str = "link";

const PLATFORM_ICONS: &[(&str, &str)] = &[
    ("github", "github"),
    ("gitlab", "gitlab"),
    ("linkedin", "linkedin"),
    ("twitter", "twitter"),
    ("x", "twitter"),
    ("instagram", "instagram"),
    ("facebook", "facebook"),
    ("youtube", "youtube"),
    ("email", "mail"),
    ("mail", "mail"),
    ("website", "globe"),
    ("portfolio", "globe"),
];

/// An explicit icon on the row wins over the platform lookup.
pub fn icon_key(link: &SocialLink) -> String {
    if let Some(icon) = link.icon.as_deref().map(str::trim).filter(|i| !i.is_empty()) {
        return icon.to_lowercase();
    }

    let platform = link.platform.trim().to_lowercase();
    PLATFORM_ICONS
        .iter()
        .find(|(name, _)| *name == platform)
        .map(|(_, icon)| icon.to_string())
        .unwrap_or_else(|| FALLBACK_ICON.to_string())
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SocialLinkView {
    #[serde(flatten)]
    pub link: SocialLink,
    pub icon_key: String,
}

pub fn social_link_views(links: Vec<SocialLink>) -> Vec<SocialLinkView> {
    links
        .into_iter()
        .map(|link| SocialLinkView {
            icon_key: icon_key(&link),
            link,
        })
        .collect()
}
