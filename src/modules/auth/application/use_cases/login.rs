use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use tracing::{info, warn};

use super::issue_tokens;
use crate::modules::auth::application::domain::entities::IssuedTokens;
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, ProfileQuery, TokenProvider,
};

// ========================= Login Request =========================
/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }
        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Profile is not an administrator")]
    NotAdmin,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login Use Case =============================
#[async_trait]
pub trait ILoginUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<IssuedTokens, LoginError>;
}

#[derive(Clone)]
pub struct LoginUseCase {
    query: Arc<dyn ProfileQuery>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl LoginUseCase {
    pub fn new(
        query: Arc<dyn ProfileQuery>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl ILoginUseCase for LoginUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<IssuedTokens, LoginError> {
        let profile = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        // OAuth-only profiles have no password to check
        let hash = profile
            .password_hash
            .as_deref()
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        if !profile.is_admin {
            warn!("Sign-in refused for non-admin profile {}", profile.id);
            return Err(LoginError::NotAdmin);
        }

        let issued = issue_tokens(self.token_provider.as_ref(), &profile)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        info!("Admin {} signed in", profile.id);
        Ok(issued)
    }
}
