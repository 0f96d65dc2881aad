use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::modules::auth::application::ports::outgoing::{
    TokenBlacklist, TokenBlacklistError, TokenError, TokenProvider, TokenType,
};
use crate::modules::auth::application::services::fingerprint;

// ========================= Refresh Token Request =========================
#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshTokenRequestError {
    #[error("Refresh token cannot be empty")]
    EmptyToken,
}

impl RefreshTokenRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshTokenRequestError> {
        let refresh_token = refresh_token.trim();
        if refresh_token.is_empty() {
            return Err(RefreshTokenRequestError::EmptyToken);
        }

        Ok(Self {
            refresh_token: refresh_token.to_string(),
        })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

impl<'de> Deserialize<'de> for RefreshTokenRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RefreshTokenRequestHelper {
            refresh_token: String,
        }

        let helper = RefreshTokenRequestHelper::deserialize(deserializer)?;
        RefreshTokenRequest::new(helper.refresh_token).map_err(serde::de::Error::custom)
    }
}

// ====================== Refresh Token Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Refresh token has expired")]
    TokenExpired,

    #[error("Invalid refresh token")]
    TokenInvalid,

    #[error("Invalid token type")]
    InvalidTokenType,

    #[error("Refresh token has been revoked")]
    TokenRevoked,

    #[error("Blacklist unavailable: {0}")]
    BlacklistUnavailable(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::InvalidTokenType(_) => RefreshTokenError::InvalidTokenType,
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
            TokenError::TokenNotYetValid
            | TokenError::InvalidSignature
            | TokenError::MalformedToken => RefreshTokenError::TokenInvalid,
        }
    }
}

impl From<TokenBlacklistError> for RefreshTokenError {
    fn from(error: TokenBlacklistError) -> Self {
        RefreshTokenError::BlacklistUnavailable(error.to_string())
    }
}

// ============================ Refresh Token Response =========================
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

// ============================ Refresh Token Use Case =============================
#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError>;
}

/// Rotates the pair: the presented refresh token is blacklisted once a new one is issued.
#[derive(Clone)]
pub struct RefreshTokenUseCase {
    token_provider: Arc<dyn TokenProvider>,
    blacklist: Arc<dyn TokenBlacklist>,
}

impl RefreshTokenUseCase {
    pub fn new(token_provider: Arc<dyn TokenProvider>, blacklist: Arc<dyn TokenBlacklist>) -> Self {
        Self {
            token_provider,
            blacklist,
        }
    }
}

#[async_trait]
impl IRefreshTokenUseCase for RefreshTokenUseCase {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        let presented = request.refresh_token();
        let claims = self
            .token_provider
            .verify_token_of_type(presented, TokenType::Refresh)?;

        let token_hash = fingerprint(presented);
        if self.blacklist.is_blacklisted(&token_hash).await? {
            warn!("Revoked refresh token presented for profile {}", claims.sub);
            return Err(RefreshTokenError::TokenRevoked);
        }

        let response = RefreshTokenResponse {
            access_token: self
                .token_provider
                .generate_access_token(claims.sub, claims.is_admin)?,
            refresh_token: self
                .token_provider
                .generate_refresh_token(claims.sub, claims.is_admin)?,
        };

        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0).unwrap_or_else(Utc::now);
        match self.blacklist.blacklist(&token_hash, expires_at).await {
            Ok(()) | Err(TokenBlacklistError::AlreadyExpired) => {}
            Err(e) => return Err(e.into()),
        }

        debug!("Rotated refresh token for profile {}", claims.sub);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_helper::test_jwt_service;
    use crate::tests::support::stubs::MemoryTokenBlacklist;
    use uuid::Uuid;

    fn use_case(blacklist: Arc<MemoryTokenBlacklist>) -> RefreshTokenUseCase {
        RefreshTokenUseCase::new(Arc::new(test_jwt_service()), blacklist)
    }

    #[tokio::test]
    async fn test_refresh_rotates_and_revokes_old_token() {
        let blacklist = Arc::new(MemoryTokenBlacklist::default());
        let old = test_jwt_service()
            .generate_refresh_token(Uuid::new_v4(), true)
            .unwrap();

        let response = use_case(blacklist.clone())
            .execute(RefreshTokenRequest::new(old.clone()).unwrap())
            .await
            .unwrap();

        assert!(!response.access_token.is_empty());
        assert!(blacklist.contains(&fingerprint(&old)));

        let replay = use_case(blacklist)
            .execute(RefreshTokenRequest::new(old).unwrap())
            .await;
        assert!(matches!(replay, Err(RefreshTokenError::TokenRevoked)));
    }

    #[tokio::test]
    async fn test_access_token_is_rejected() {
        let access = test_jwt_service()
            .generate_access_token(Uuid::new_v4(), true)
            .unwrap();

        let result = use_case(Arc::new(MemoryTokenBlacklist::default()))
            .execute(RefreshTokenRequest::new(access).unwrap())
            .await;

        assert!(matches!(result, Err(RefreshTokenError::InvalidTokenType)));
    }

    #[tokio::test]
    async fn test_garbage_token_is_invalid() {
        let result = use_case(Arc::new(MemoryTokenBlacklist::default()))
            .execute(RefreshTokenRequest::new("not.a.jwt".into()).unwrap())
            .await;

        assert!(matches!(result, Err(RefreshTokenError::TokenInvalid)));
    }

    #[tokio::test]
    async fn test_blacklist_outage_is_reported() {
        let blacklist = Arc::new(MemoryTokenBlacklist::failing());
        let token = test_jwt_service()
            .generate_refresh_token(Uuid::new_v4(), true)
            .unwrap();

        let result = use_case(blacklist)
            .execute(RefreshTokenRequest::new(token).unwrap())
            .await;

        assert!(matches!(
            result,
            Err(RefreshTokenError::BlacklistUnavailable(_))
        ));
    }

    #[test]
    fn test_empty_request_is_rejected() {
        assert_eq!(
            RefreshTokenRequest::new("   ".into()).unwrap_err(),
            RefreshTokenRequestError::EmptyToken
        );
    }
}
