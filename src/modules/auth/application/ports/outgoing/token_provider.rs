use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
    /// Round-trips through an OAuth provider as the `state` parameter.
    OauthState,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
            TokenType::OauthState => "oauth_state",
        }
    }
}

/// Structure for JWT Claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid, // Profile ID (random for OAuth state)
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub iss: String,
    pub token_type: TokenType,
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, profile_id: Uuid, is_admin: bool)
        -> Result<String, TokenError>;

    fn generate_refresh_token(
        &self,
        profile_id: Uuid,
        is_admin: bool,
    ) -> Result<String, TokenError>;

    /// Short-lived token bound to one provider.
    fn generate_oauth_state(&self, provider: &str) -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    /// Verifies the token and checks it has the expected type.
    fn verify_token_of_type(
        &self,
        token: &str,
        expected: TokenType,
    ) -> Result<TokenClaims, TokenError> {
        let claims = self.verify_token(token)?;
        if claims.token_type != expected {
            return Err(TokenError::InvalidTokenType(expected.as_str().to_string()));
        }
        Ok(claims)
    }
}
