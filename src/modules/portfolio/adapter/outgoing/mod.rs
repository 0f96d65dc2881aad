pub mod about_store_postgres;
pub mod achievement_store_postgres;
pub mod broadcast_change_feed;
pub mod certificate_store_postgres;
pub mod experience_store_postgres;
mod postgres_support;
pub mod project_store_postgres;
pub mod publishing_store;
pub mod sea_orm_entity;
pub mod skill_store_postgres;
pub mod social_link_store_postgres;
pub mod testimonial_store_postgres;

pub use about_store_postgres::AboutStorePostgres;
pub use achievement_store_postgres::AchievementStorePostgres;
pub use broadcast_change_feed::BroadcastChangeFeed;
pub use certificate_store_postgres::CertificateStorePostgres;
pub use experience_store_postgres::ExperienceStorePostgres;
pub use project_store_postgres::ProjectStorePostgres;
pub use publishing_store::{publishing_stores, PublishingStore};
pub use skill_store_postgres::SkillStorePostgres;
pub use social_link_store_postgres::SocialLinkStorePostgres;
pub use testimonial_store_postgres::TestimonialStorePostgres;
