use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use super::issue_tokens;
use crate::modules::auth::application::domain::entities::IssuedTokens;
use crate::modules::auth::application::ports::outgoing::{
    OAuthClient, OAuthError, ProfileQuery, TokenProvider, TokenType,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum OAuthLoginError {
    #[error("Unknown OAuth provider: {0}")]
    UnknownProvider(String),

    #[error("OAuth state is invalid or expired")]
    InvalidState,

    #[error("OAuth provider failed: {0}")]
    ProviderFailed(String),

    #[error("No profile is registered for this account")]
    NoProfile,

    #[error("Profile is not an administrator")]
    NotAdmin,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

impl From<OAuthError> for OAuthLoginError {
    fn from(error: OAuthError) -> Self {
        match error {
            OAuthError::UnknownProvider(p) => OAuthLoginError::UnknownProvider(p),
            other => OAuthLoginError::ProviderFailed(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IOAuthLoginUseCase: Send + Sync {
    /// Authorize URL carrying a signed state bound to `provider`.
    fn begin(&self, provider: &str) -> Result<String, OAuthLoginError>;

    async fn complete(
        &self,
        provider: &str,
        code: &str,
        state: &str,
    ) -> Result<IssuedTokens, OAuthLoginError>;
}

#[derive(Clone)]
pub struct OAuthLoginUseCase {
    client: Arc<dyn OAuthClient>,
    query: Arc<dyn ProfileQuery>,
    token_provider: Arc<dyn TokenProvider>,
}

impl OAuthLoginUseCase {
    pub fn new(
        client: Arc<dyn OAuthClient>,
        query: Arc<dyn ProfileQuery>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            client,
            query,
            token_provider,
        }
    }
}

#[async_trait]
impl IOAuthLoginUseCase for OAuthLoginUseCase {
    fn begin(&self, provider: &str) -> Result<String, OAuthLoginError> {
        let state = self
            .token_provider
            .generate_oauth_state(provider)
            .map_err(|e| OAuthLoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(self.client.authorize_url(provider, &state)?)
    }

    async fn complete(
        &self,
        provider: &str,
        code: &str,
        state: &str,
    ) -> Result<IssuedTokens, OAuthLoginError> {
        let claims = self
            .token_provider
            .verify_token_of_type(state, TokenType::OauthState)
            .map_err(|_| OAuthLoginError::InvalidState)?;

        if claims.provider.as_deref() != Some(provider) {
            warn!("OAuth state issued for {:?} used with {}", claims.provider, provider);
            return Err(OAuthLoginError::InvalidState);
        }

        let email = self.client.fetch_email(provider, code).await?;

        let profile = self
            .query
            .find_by_email(&email.to_lowercase())
            .await
            .map_err(|e| OAuthLoginError::QueryError(e.to_string()))?
            .ok_or(OAuthLoginError::NoProfile)?;

        if !profile.is_admin {
            return Err(OAuthLoginError::NotAdmin);
        }

        let issued = issue_tokens(self.token_provider.as_ref(), &profile)
            .map_err(|e| OAuthLoginError::TokenGenerationFailed(e.to_string()))?;

        info!("Admin {} signed in through {}", profile.id, provider);
        Ok(issued)
    }
}
