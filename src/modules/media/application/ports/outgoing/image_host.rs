use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageHostError {
    #[error("Image host request failed: {0}")]
    RequestFailed(String),

    #[error("Image host rejected the image: {0}")]
    Rejected(String),

    #[error("Unexpected image host response")]
    InvalidResponse,
}

/// Third-party hosting that copies an image from a source URL.
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn rehost(&self, source_url: &str) -> Result<String, ImageHostError>;
}
