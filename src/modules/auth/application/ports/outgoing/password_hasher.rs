use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("could not hash password")]
    HashFailed,

    /// The stored hash is malformed; a plain mismatch is `Ok(false)`.
    #[error("could not verify password against stored hash")]
    VerifyFailed,

    #[error("hashing worker did not finish")]
    TaskFailed,
}

/// Admin credential hashing. Implementations run the work off the async runtime.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, plain: &str) -> Result<String, HashError>;

    async fn verify_password(&self, plain: &str, stored_hash: &str) -> Result<bool, HashError>;
}
