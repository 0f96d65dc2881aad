use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use uuid::Uuid;

use super::jwt_config::JwtConfig;
use crate::modules::auth::application::ports::outgoing::{
    TokenClaims, TokenError, TokenProvider, TokenType,
};

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        subject: Uuid,
        is_admin: bool,
        token_type: TokenType,
        provider: Option<String>,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: subject,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type,
            is_admin,
            provider,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, profile_id: Uuid, is_admin: bool) -> Result<String, TokenError> {
        self.generate_token(
            profile_id,
            is_admin,
            TokenType::Access,
            None,
            self.config.access_token_expiry,
        )
    }

    fn generate_refresh_token(
        &self,
        profile_id: Uuid,
        is_admin: bool,
    ) -> Result<String, TokenError> {
        self.generate_token(
            profile_id,
            is_admin,
            TokenType::Refresh,
            None,
            self.config.refresh_token_expiry,
        )
    }

    fn generate_oauth_state(&self, provider: &str) -> Result<String, TokenError> {
        self.generate_token(
            Uuid::new_v4(),
            false,
            TokenType::OauthState,
            Some(provider.to_string()),
            self.config.oauth_state_expiry,
        )
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded = decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;

            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token verification failed: Token expired");
                    TokenError::TokenExpired
                }
                ErrorKind::ImmatureSignature => {
                    tracing::warn!("Token verification failed: Token not yet valid");
                    TokenError::TokenNotYetValid
                }
                ErrorKind::InvalidSignature => {
                    tracing::error!("Security alert: Invalid token signature detected");
                    TokenError::InvalidSignature
                }
                _ => {
                    tracing::warn!("Token verification failed: {}", e);
                    TokenError::MalformedToken
                }
            }
        })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret_key: secret.to_string(),
            issuer: "test_issuer".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 86400,
            oauth_state_expiry: 600,
        }
    }

    fn service() -> JwtTokenService {
        JwtTokenService::new(config("FAKE_JWT_SECRET_DO_NOT_USE_0123456789"))
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let id = Uuid::new_v4();
        let token = service().generate_access_token(id, true).unwrap();
        let claims = service().verify_token(&token).unwrap();

        assert_eq!(claims.sub, id);
        assert_eq!(claims.token_type, TokenType::Access);
        assert!(claims.is_admin);
        assert_eq!(claims.iss, "test_issuer");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_type_is_checked() {
        let refresh = service()
            .generate_refresh_token(Uuid::new_v4(), true)
            .unwrap();

        assert!(service()
            .verify_token_of_type(&refresh, TokenType::Refresh)
            .is_ok());
        assert_eq!(
            service()
                .verify_token_of_type(&refresh, TokenType::Access)
                .unwrap_err(),
            TokenError::InvalidTokenType("access".into())
        );
    }

    #[test]
    fn test_oauth_state_carries_provider() {
        let state = service().generate_oauth_state("github").unwrap();
        let claims = service()
            .verify_token_of_type(&state, TokenType::OauthState)
            .unwrap();

        assert_eq!(claims.provider.as_deref(), Some("github"));
        assert!(!claims.is_admin);
    }

    #[test]
    fn test_other_secret_is_rejected() {
        let token = service()
            .generate_access_token(Uuid::new_v4(), true)
            .unwrap();
        let other = JwtTokenService::new(config("ANOTHER_SECRET_THAT_IS_LONG_ENOUGH_42"));

        assert_eq!(
            other.verify_token(&token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_expired_token() {
        let mut cfg = config("FAKE_JWT_SECRET_DO_NOT_USE_0123456789");
        cfg.access_token_expiry = -120;
        let svc = JwtTokenService::new(cfg);

        let token = svc.generate_access_token(Uuid::new_v4(), true).unwrap();
        assert_eq!(svc.verify_token(&token).unwrap_err(), TokenError::TokenExpired);
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert_eq!(
            service().verify_token("not-a-token").unwrap_err(),
            TokenError::MalformedToken
        );
    }
}
