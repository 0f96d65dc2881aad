pub mod gcs_image_storage;
pub mod image_host_http;

pub use gcs_image_storage::GcsImageStorage;
pub use image_host_http::HttpImageHost;
