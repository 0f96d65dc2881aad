pub mod admin_services;
pub mod domain;
pub mod services;

pub use admin_services::AdminServices;
