pub mod get_about;
pub mod get_achievements;
pub mod get_certificates;
pub mod get_experience;
pub mod get_page;
pub mod get_projects;
pub mod get_skills;
pub mod get_social_links;
pub mod realtime_events;
pub mod testimonials;

pub use get_about::get_about_handler;
pub use get_achievements::get_achievements_handler;
pub use get_certificates::{get_certificate_handler, get_certificates_handler};
pub use get_experience::get_experience_handler;
pub use get_page::get_page_handler;
pub use get_projects::{get_project_tags_handler, get_projects_handler};
pub use get_skills::get_skills_handler;
pub use get_social_links::get_social_links_handler;
pub use realtime_events::realtime_events_handler;
pub use testimonials::{get_testimonials_handler, submit_testimonial_handler, TestimonialSubmission};
