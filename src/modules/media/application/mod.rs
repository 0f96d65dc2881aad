pub mod domain;
pub mod media_services;
pub mod ports;
pub mod services;

pub use media_services::MediaServices;
