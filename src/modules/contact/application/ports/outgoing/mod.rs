pub mod contact_mailer;
pub mod contact_repository;

pub use contact_mailer::{ContactMailer, ContactMailerError};
pub use contact_repository::{ContactRepository, ContactRepositoryError};
