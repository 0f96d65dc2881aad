use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::SessionProfile;
use crate::modules::auth::application::ports::outgoing::ProfileQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error("Profile no longer exists")]
    ProfileNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ISessionUseCase: Send + Sync {
    async fn execute(&self, profile_id: Uuid) -> Result<SessionProfile, SessionError>;
}

/// Resolves the profile behind a verified access token.
#[derive(Clone)]
pub struct SessionUseCase {
    query: Arc<dyn ProfileQuery>,
}

impl SessionUseCase {
    pub fn new(query: Arc<dyn ProfileQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ISessionUseCase for SessionUseCase {
    async fn execute(&self, profile_id: Uuid) -> Result<SessionProfile, SessionError> {
        self.query
            .find_by_id(profile_id)
            .await
            .map_err(|e| SessionError::QueryError(e.to_string()))?
            .map(|profile| SessionProfile::from(&profile))
            .ok_or(SessionError::ProfileNotFound)
    }
}
