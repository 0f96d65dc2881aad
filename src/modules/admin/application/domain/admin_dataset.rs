use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::portfolio::application::domain::entities::{
    AboutSection, Achievement, Certificate, Experience, Project, SocialLink, Skill, Testimonial,
};

/// Every collection the admin page edits, unapproved rows included.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminDataset {
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub certificates: Vec<Certificate>,
    pub achievements: Vec<Achievement>,
    pub testimonials: Vec<Testimonial>,
    pub social_links: Vec<SocialLink>,
    pub about: Option<AboutSection>,
    pub contacts: Vec<ContactMessage>,
}
