use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenBlacklistError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Token already expired")]
    AlreadyExpired,
}

/// Revoked refresh tokens, keyed by their SHA-256 hash.
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    /// The entry lives until the token would have expired anyway.
    async fn blacklist(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenBlacklistError>;

    async fn is_blacklisted(&self, token_hash: &str) -> Result<bool, TokenBlacklistError>;
}
