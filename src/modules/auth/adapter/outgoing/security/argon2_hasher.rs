use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;
use tracing::warn;

use crate::config::parse_or;
use crate::modules::auth::application::ports::outgoing::{
    HashError, PasswordHasher as HasherTrait,
};

const MEMORY_KIB: u32 = 4 * 1024;
const ITERATIONS: u32 = 3;
const PARALLELISM: u32 = 1;

/// Argon2id with parameters sized for a small VPS. Verification reads the
/// parameters back out of the stored PHC string, so tuning can change
/// without invalidating existing hashes.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::with_params(MEMORY_KIB, ITERATIONS, PARALLELISM)
    }
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        let params = match Params::new(memory_kib, iterations, parallelism, None) {
            Ok(params) => params,
            Err(e) => {
                warn!("Rejected argon2 tuning ({}); falling back to library defaults", e);
                Params::default()
            }
        };

        Self {
            params,
            #[cfg(test)]
            salt_override: None,
        }
    }

    /// Reads `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS` and `ARGON2_PARALLELISM`.
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let tuned = |key: &str, fallback: u32| parse_or(key, fallback).unwrap_or(fallback);

        Self::with_params(
            tuned("ARGON2_MEMORY_KIB", MEMORY_KIB),
            tuned("ARGON2_ITERATIONS", ITERATIONS),
            tuned("ARGON2_PARALLELISM", PARALLELISM),
        )
    }

    #[cfg(test)]
    pub fn with_fixed_salt(salt: &str) -> Self {
        let mut hasher = Self::default();
        hasher.salt_override = Some(SaltString::from_b64(salt).expect("valid b64 salt"));
        hasher
    }

    fn salt(&self) -> SaltString {
        #[cfg(test)]
        let fixed = self.salt_override.clone();
        #[cfg(not(test))]
        let fixed: Option<SaltString> = None;

        fixed.unwrap_or_else(|| SaltString::generate(&mut OsRng))
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, plain: &str) -> Result<String, HashError> {
        let plain = plain.to_owned();
        let params = self.params.clone();
        let salt = self.salt();

        tokio::task::spawn_blocking(move || {
            Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
                .hash_password(plain.as_bytes(), &salt)
                .map(|phc| phc.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, plain: &str, stored_hash: &str) -> Result<bool, HashError> {
        let plain = plain.to_owned();
        let stored_hash = stored_hash.to_owned();

        tokio::task::spawn_blocking(move || {
            let phc = PasswordHash::new(&stored_hash).map_err(|_| HashError::VerifyFailed)?;
            match Argon2::default().verify_password(plain.as_bytes(), &phc) {
                Ok(()) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_argon2_hash_and_verify_password() {
        let hasher = Argon2Hasher::new();
        let hashed = hasher.hash_password("SecurePassword123").await.unwrap();

        assert!(hasher
            .verify_password("SecurePassword123", &hashed)
            .await
            .unwrap());
        assert!(!hasher.verify_password("WrongPassword", &hashed).await.unwrap());
        assert!(hasher.verify_password("x", "invalid-hash").await.is_err());
    }

    #[tokio::test]
    async fn test_hash_password_error() {
        let bad_salt = SaltString::encode_b64(b"short").unwrap();
        let hasher = Argon2Hasher::with_fixed_salt(bad_salt.as_str());

        let result = hasher.hash_password("abc123").await;
        assert!(matches!(result, Err(HashError::HashFailed)));
    }

    #[test]
    fn test_invalid_params_fall_back() {
        let hasher = Argon2Hasher::with_params(0, 0, 0);
        assert_eq!(hasher.params.m_cost(), Params::default().m_cost());
    }
}
