use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::modules::contact::application::domain::{ContactMessage, ContactSubmission};
use crate::modules::contact::application::ports::outgoing::{
    ContactMailer, ContactMailerError, ContactRepository, ContactRepositoryError,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactError {
    #[error("Contact message not found")]
    NotFound,

    #[error("Could not store contact message: {0}")]
    Store(String),

    /// The message is stored; only the notification failed.
    #[error("Contact message {} stored but not delivered: {reason}", stored.id)]
    Delivery {
        stored: ContactMessage,
        reason: ContactMailerError,
    },
}

impl From<ContactRepositoryError> for ContactError {
    fn from(err: ContactRepositoryError) -> Self {
        match err {
            ContactRepositoryError::NotFound => ContactError::NotFound,
            ContactRepositoryError::DatabaseError(msg) => ContactError::Store(msg),
        }
    }
}

pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
    mailer: Arc<dyn ContactMailer>,
}

impl ContactService {
    pub fn new(repository: Arc<dyn ContactRepository>, mailer: Arc<dyn ContactMailer>) -> Self {
        Self { repository, mailer }
    }

    /// Stores first. Delivery only happens once the row exists.
    pub async fn submit(&self, submission: ContactSubmission) -> Result<ContactMessage, ContactError> {
        let stored = self.repository.insert(&submission).await.map_err(|e| {
            error!(error = %e, "Failed to store contact message");
            ContactError::from(e)
        })?;

        match self.mailer.deliver(&submission).await {
            Ok(()) => {
                info!(contact_id = %stored.id, "Contact message stored and delivered");
                Ok(stored)
            }
            Err(reason) => {
                warn!(contact_id = %stored.id, error = %reason, "Contact notification failed");
                Err(ContactError::Delivery { stored, reason })
            }
        }
    }

    pub async fn list(&self) -> Result<Vec<ContactMessage>, ContactError> {
        Ok(self.repository.list().await?)
    }

    pub async fn set_read(&self, id: Uuid, read: bool) -> Result<ContactMessage, ContactError> {
        Ok(self.repository.set_read(id, read).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ContactError> {
        Ok(self.repository.delete(id).await?)
    }
}
