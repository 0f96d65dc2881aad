use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::{TokenBlacklist, TokenBlacklistError};

/// Redis-backed refresh-token blacklist.
///
/// ```text
/// auth:blacklist:token:{token_hash} -> "1"   (TTL = remaining token lifetime)
/// ```
///
/// Redis TTL is the only cleanup mechanism.
#[derive(Clone)]
pub struct RedisTokenBlacklist {
    pool: Arc<Pool>,
}

impl RedisTokenBlacklist {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("auth:blacklist:token:{token_hash}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenBlacklistError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenBlacklistError::DatabaseError(format!("Pool error: {}", e)))
    }
}

/// Seconds left before `expires_at`, `None` when already past.
fn remaining_ttl(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Option<u64> {
    let ttl = (expires_at - now).num_seconds();
    (ttl > 0).then_some(ttl as u64)
}

#[async_trait]
impl TokenBlacklist for RedisTokenBlacklist {
    async fn blacklist(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenBlacklistError> {
        let ttl = remaining_ttl(expires_at, Utc::now()).ok_or(TokenBlacklistError::AlreadyExpired)?;

        let mut conn = self.get_conn().await?;
        conn.set_ex::<_, _, ()>(Self::token_key(token_hash), "1", ttl)
            .await
            .map_err(|e| TokenBlacklistError::DatabaseError(e.to_string()))
    }

    async fn is_blacklisted(&self, token_hash: &str) -> Result<bool, TokenBlacklistError> {
        let mut conn = self.get_conn().await?;

        conn.exists(Self::token_key(token_hash))
            .await
            .map_err(|e| TokenBlacklistError::DatabaseError(e.to_string()))
    }
}
