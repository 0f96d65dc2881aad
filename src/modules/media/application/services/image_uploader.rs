use std::sync::Arc;
use tracing::{debug, info};

use super::image_compressor::{compress, CompressionError};
use crate::modules::media::application::domain::{
    new_object_path, storage_path_from_url, ImageUpload,
};
use crate::modules::media::application::ports::outgoing::{
    ImageStorage, ImageStorageError, StorageBucket,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error(transparent)]
    Compression(#[from] CompressionError),

    #[error(transparent)]
    Storage(#[from] ImageStorageError),
}

/// Compresses and stores uploads, and removes stored images by URL.
pub struct ImageUploader {
    storage: Arc<dyn ImageStorage>,
}

impl ImageUploader {
    pub fn new(storage: Arc<dyn ImageStorage>) -> Self {
        Self { storage }
    }

    pub async fn upload(
        &self,
        bucket: StorageBucket,
        upload: ImageUpload,
    ) -> Result<String, MediaError> {
        let original_size = upload.bytes.len();
        let compressed = compress(upload.bytes).await?;
        let path = new_object_path();

        debug!(
            file = %upload.file_name,
            original_size,
            compressed_size = compressed.bytes.len(),
            "Image compressed"
        );

        let url = self
            .storage
            .upload(bucket, &path, compressed.bytes, "image/jpeg")
            .await?;

        info!(?bucket, %path, "Image stored");
        Ok(url)
    }

    /// Only URLs under the bucket's public prefix are ours to delete.
    /// Anything else (external hosts, Drive links) is left alone.
    pub async fn remove(&self, bucket: StorageBucket, url: &str) -> Result<(), MediaError> {
        let prefix = self.storage.public_prefix(bucket);
        match storage_path_from_url(url, &prefix) {
            Some(path) => Ok(self.storage.remove(bucket, &path).await?),
            None => {
                debug!(%url, "Image URL is not in our storage, nothing to remove");
                Ok(())
            }
        }
    }
}
