pub mod drive_url;
pub mod image_upload;
pub mod storage_path;

pub use drive_url::convert_google_drive_url;
pub use image_upload::{ImagePayload, ImageUpload, ImageUploadError, MAX_IMAGE_BYTES};
pub use storage_path::{new_object_path, storage_path_from_url};
