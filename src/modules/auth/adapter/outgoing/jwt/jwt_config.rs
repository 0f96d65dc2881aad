use crate::config::{optional, parse_or, required, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
    pub refresh_token_expiry: i64,
    pub oauth_state_expiry: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("JWT_SECRET")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET".into(),
                reason: "must be at least 32 characters long for HS256".into(),
            });
        }

        let access_token_expiry: i64 = parse_or("JWT_ACCESS_EXPIRY", 1800)?;
        let refresh_token_expiry: i64 = parse_or("JWT_REFRESH_EXPIRY", 604800)?;
        let oauth_state_expiry: i64 = parse_or("JWT_OAUTH_STATE_EXPIRY", 600)?;

        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY".into(),
                reason: "must be between 1 and 86400 seconds".into(),
            });
        }

        if refresh_token_expiry <= access_token_expiry {
            return Err(ConfigError::Invalid {
                key: "JWT_REFRESH_EXPIRY".into(),
                reason: "must be greater than JWT_ACCESS_EXPIRY".into(),
            });
        }

        Ok(Self {
            secret_key,
            issuer: optional("JWT_ISSUER").unwrap_or_else(|| "portfolio".to_string()),
            access_token_expiry,
            refresh_token_expiry,
            oauth_state_expiry,
        })
    }
}
