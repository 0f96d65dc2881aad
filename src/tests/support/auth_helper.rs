use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::ports::outgoing::TokenProvider;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "portfolio-test".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
        oauth_state_expiry: 600,
    })
}

/// Shape the auth extractors look up in app data.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider>> {
    let provider: Arc<dyn TokenProvider> = Arc::new(test_jwt_service());
    web::Data::new(provider)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn admin_token() -> String {
    test_jwt_service()
        .generate_access_token(Uuid::new_v4(), true)
        .unwrap()
}

pub fn reader_token() -> String {
    test_jwt_service()
        .generate_access_token(Uuid::new_v4(), false)
        .unwrap()
}
