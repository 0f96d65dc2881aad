use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::modules::auth::application::ports::outgoing::{
    TokenBlacklist, TokenProvider, TokenType,
};
use crate::modules::auth::application::services::fingerprint;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LogoutRequest {
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LogoutResponse {
    pub message: String,
}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    /// Never fails for the caller. Problems revoking the token are only logged.
    async fn execute(&self, request: LogoutRequest) -> LogoutResponse;
}

#[derive(Clone)]
pub struct LogoutUseCase {
    token_provider: Arc<dyn TokenProvider>,
    blacklist: Arc<dyn TokenBlacklist>,
}

impl LogoutUseCase {
    pub fn new(token_provider: Arc<dyn TokenProvider>, blacklist: Arc<dyn TokenBlacklist>) -> Self {
        Self {
            token_provider,
            blacklist,
        }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, request: LogoutRequest) -> LogoutResponse {
        let token = request
            .refresh_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());

        if let Some(token) = token {
            match self
                .token_provider
                .verify_token_of_type(token, TokenType::Refresh)
            {
                Ok(claims) => {
                    let expires_at =
                        DateTime::<Utc>::from_timestamp(claims.exp, 0).unwrap_or_else(Utc::now);

                    match self.blacklist.blacklist(&fingerprint(token), expires_at).await {
                        Ok(()) => info!("Refresh token revoked for profile {}", claims.sub),
                        Err(e) => warn!("Failed to revoke refresh token on logout: {}", e),
                    }
                }
                Err(e) => warn!("Ignoring unusable token during logout: {}", e),
            }
        }

        LogoutResponse {
            message: "Logged out successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_helper::test_jwt_service;
    use crate::tests::support::stubs::MemoryTokenBlacklist;
    use uuid::Uuid;

    fn request(token: Option<String>) -> LogoutRequest {
        LogoutRequest {
            refresh_token: token,
        }
    }

    #[tokio::test]
    async fn test_logout_blacklists_refresh_token() {
        let blacklist = Arc::new(MemoryTokenBlacklist::default());
        let token = test_jwt_service()
            .generate_refresh_token(Uuid::new_v4(), true)
            .unwrap();

        LogoutUseCase::new(Arc::new(test_jwt_service()), blacklist.clone())
            .execute(request(Some(token.clone())))
            .await;

        assert!(blacklist.contains(&fingerprint(&token)));
    }

    #[tokio::test]
    async fn test_logout_without_token_succeeds() {
        let blacklist = Arc::new(MemoryTokenBlacklist::default());
        let response = LogoutUseCase::new(Arc::new(test_jwt_service()), blacklist.clone())
            .execute(request(None))
            .await;

        assert_eq!(response.message, "Logged out successfully");
        assert!(blacklist.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_token_and_store_failure_still_succeed() {
        let failing = Arc::new(MemoryTokenBlacklist::failing());
        let token = test_jwt_service()
            .generate_refresh_token(Uuid::new_v4(), true)
            .unwrap();

        let use_case = LogoutUseCase::new(Arc::new(test_jwt_service()), failing);
        use_case.execute(request(Some("garbage".into()))).await;
        let response = use_case.execute(request(Some(token))).await;

        assert_eq!(response.message, "Logged out successfully");
    }
}
