pub mod admin;
pub mod auth;
pub mod contact;
pub mod media;
pub mod portfolio;
pub mod resume;
