use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use serde::Deserialize;
use utoipa::ToSchema;

/// Upper bound for a decoded upload, before compression.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageUploadError {
    #[error("Image data is not valid base64")]
    InvalidEncoding,

    #[error("Image is empty")]
    Empty,

    #[error("Image exceeds {0} bytes")]
    TooLarge(usize),

    #[error("Only image uploads are accepted, got {0}")]
    NotAnImage(String),
}

/// Image as it arrives in a JSON body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ImagePayload {
    #[schema(example = "cover.png")]
    pub file_name: String,
    #[schema(example = "image/png")]
    pub content_type: String,
    /// Standard base64, with or without a `data:` prefix.
    pub data_base64: String,
}

/// Decoded image ready for compression.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl TryFrom<ImagePayload> for ImageUpload {
    type Error = ImageUploadError;

    fn try_from(payload: ImagePayload) -> Result<Self, Self::Error> {
        let content_type = payload.content_type.trim().to_lowercase();
        if !content_type.starts_with("image/") {
            return Err(ImageUploadError::NotAnImage(content_type));
        }

        let data = payload.data_base64.trim();
        let data = match data.split_once(";base64,") {
            Some((_, rest)) => rest,
            None => data,
        };

        let bytes = STANDARD
            .decode(data)
            .map_err(|_| ImageUploadError::InvalidEncoding)?;

        if bytes.is_empty() {
            return Err(ImageUploadError::Empty);
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(ImageUploadError::TooLarge(MAX_IMAGE_BYTES));
        }

        Ok(Self {
            file_name: payload.file_name,
            content_type,
            bytes: Bytes::from(bytes),
        })
    }
}
