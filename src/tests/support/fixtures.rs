use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::drafts::{
    AboutDraft, AchievementDraft, CertificateDraft, ExperienceDraft, ProjectDraft, SkillDraft,
    SocialLinkDraft, TestimonialDraft,
};
use crate::modules::portfolio::application::domain::entities::{
    AboutSection, Achievement, Certificate, CertificateType, Experience, ExperienceType, Project,
    SocialLink, Skill, Testimonial,
};
use crate::modules::portfolio::application::ports::outgoing::ContentStores;
use crate::tests::support::memory_store::MemoryStore;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn empty_stores() -> ContentStores {
    ContentStores {
        projects: Arc::new(MemoryStore::<ProjectDraft>::new()),
        experience: Arc::new(MemoryStore::<ExperienceDraft>::new()),
        skills: Arc::new(MemoryStore::<SkillDraft>::new()),
        certificates: Arc::new(MemoryStore::<CertificateDraft>::new()),
        achievements: Arc::new(MemoryStore::<AchievementDraft>::new()),
        testimonials: Arc::new(MemoryStore::<TestimonialDraft>::new()),
        social_links: Arc::new(MemoryStore::<SocialLinkDraft>::new()),
        about: Arc::new(MemoryStore::<AboutDraft>::new()),
    }
}

pub fn project(title: &str, tags: &[&str]) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{title} description"),
        image_url: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        link: Some("https://github.com/example/repo".to_string()),
        created_at: Utc::now(),
    }
}

pub fn project_draft(title: &str) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: "Built with Rust".to_string(),
        image_url: None,
        tags: vec!["Rust".to_string()],
        link: None,
    }
}

pub fn experience(position: &str, kind: ExperienceType, start: NaiveDate) -> Experience {
    Experience {
        id: Uuid::new_v4(),
        position: position.to_string(),
        organization: "Acme".to_string(),
        start_date: start,
        end_date: None,
        description: "Shipped features".to_string(),
        experience_type: kind,
    }
}

pub fn skill(name: &str, category: &str, level: i16) -> Skill {
    Skill {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: category.to_string(),
        level,
    }
}

pub fn certificate(title: &str, kind: CertificateType) -> Certificate {
    Certificate {
        id: Uuid::new_v4(),
        title: title.to_string(),
        issuer: "Coursera".to_string(),
        date: date(2023, 6, 1),
        description: String::new(),
        image_url: Some(format!(
            "https://storage.googleapis.com/certificates/{}.jpg",
            title.to_lowercase().replace(' ', "-")
        )),
        certificate_type: kind,
    }
}

pub fn achievement(title: &str, approved: bool) -> Achievement {
    Achievement {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: String::new(),
        date: date(2022, 11, 20),
        image_url: None,
        is_approved: approved,
        awarded_by: None,
    }
}

pub fn testimonial(name: &str, approved: bool) -> Testimonial {
    Testimonial {
        id: Uuid::new_v4(),
        name: name.to_string(),
        position: None,
        company: Some("Globex".to_string()),
        content: "A pleasure to work with.".to_string(),
        rating: 5,
        image_url: None,
        is_approved: approved,
        created_at: Utc::now(),
    }
}

pub fn social_link(platform: &str) -> SocialLink {
    SocialLink {
        id: Uuid::new_v4(),
        platform: platform.to_string(),
        url: format!("https://{}.com/someone", platform.to_lowercase()),
        icon: None,
        label: None,
    }
}

pub fn about() -> AboutSection {
    AboutSection {
        id: Uuid::new_v4(),
        title: "About me".to_string(),
        content: "Backend engineer who likes types.".to_string(),
        tagline: Some("Rust | Postgres".to_string()),
        footer_bio: None,
    }
}
