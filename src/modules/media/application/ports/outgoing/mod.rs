pub mod image_host;
pub mod image_storage;

pub use image_host::{ImageHost, ImageHostError};
pub use image_storage::{ImageStorage, ImageStorageError, StorageBucket};
