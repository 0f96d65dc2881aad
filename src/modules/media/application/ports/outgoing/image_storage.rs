use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Buckets images are stored in. Achievements share the certificates bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBucket {
    Projects,
    Testimonials,
    Certificates,
}

impl StorageBucket {
    pub fn default_name(&self) -> &'static str {
        match self {
            StorageBucket::Projects => "portfolio-projects",
            StorageBucket::Testimonials => "portfolio-testimonials",
            StorageBucket::Certificates => "portfolio-certificates",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageStorageError {
    #[error("Object not found")]
    NotFound,

    #[error("Access denied")]
    AccessDenied,

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Stores `bytes` at `path` and returns the public URL.
    async fn upload(
        &self,
        bucket: StorageBucket,
        path: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<String, ImageStorageError>;

    async fn remove(&self, bucket: StorageBucket, path: &str) -> Result<(), ImageStorageError>;

    /// `{public base}/{bucket}/`. Every URL returned by `upload` starts with it.
    fn public_prefix(&self, bucket: StorageBucket) -> String;
}
