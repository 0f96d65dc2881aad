use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Profile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, ProfileQueryError>;

    /// Case-insensitive.
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, ProfileQueryError>;
}
