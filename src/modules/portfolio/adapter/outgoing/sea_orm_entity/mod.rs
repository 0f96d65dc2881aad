pub mod about_sections;
pub mod achievements;
pub mod certificates;
pub mod experiences;
pub mod projects;
pub mod skills;
pub mod social_links;
pub mod testimonials;
