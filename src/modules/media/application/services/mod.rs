pub mod image_compressor;
pub mod image_rehoster;
pub mod image_uploader;

pub use image_compressor::{compress, CompressedImage, CompressionError};
pub use image_rehoster::ImageRehoster;
pub use image_uploader::{ImageUploader, MediaError};
