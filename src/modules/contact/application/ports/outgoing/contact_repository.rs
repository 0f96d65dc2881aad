use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::{ContactMessage, ContactSubmission};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Contact message not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ContactMessage, ContactRepositoryError>;

    /// Unread first, then newest first.
    async fn list(&self) -> Result<Vec<ContactMessage>, ContactRepositoryError>;

    async fn set_read(&self, id: Uuid, read: bool)
        -> Result<ContactMessage, ContactRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError>;
}
