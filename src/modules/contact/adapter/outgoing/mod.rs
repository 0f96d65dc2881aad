pub mod contact_repository_postgres;
pub mod http_contact_mailer;
pub mod sea_orm_entity;
pub mod smtp_contact_mailer;

pub use contact_repository_postgres::ContactRepositoryPostgres;
pub use http_contact_mailer::HttpContactMailer;
pub use smtp_contact_mailer::SmtpContactMailer;
