use async_trait::async_trait;

use crate::modules::contact::application::domain::ContactSubmission;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactMailerError {
    #[error("Delivery endpoint rejected the message: {0}")]
    Rejected(String),

    #[error("Delivery transport failed: {0}")]
    Transport(String),

    #[error("Invalid mail configuration: {0}")]
    Configuration(String),
}

/// Forwards a stored contact message to the site owner.
#[async_trait]
pub trait ContactMailer: Send + Sync {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactMailerError>;
}
