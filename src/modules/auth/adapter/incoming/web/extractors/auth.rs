use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{TokenProvider, TokenType};
use crate::shared::api::ApiResponse;

/// Any holder of a valid access token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub profile_id: Uuid,
    pub is_admin: bool,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ActixError> {
    let token_provider = req
        .app_data::<web::Data<Arc<dyn TokenProvider>>>()
        .ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

    let token = extract_token_from_header(req).ok_or_else(|| {
        create_api_error(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        ))
    })?;

    let claims = token_provider.verify_token(&token).map_err(|_| {
        create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))
    })?;

    if claims.token_type != TokenType::Access {
        return Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN_TYPE",
            "Invalid token type",
        )));
    }

    Ok(AuthenticatedUser {
        profile_id: claims.sub,
        is_admin: claims.is_admin,
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

/// Access token whose profile is an administrator
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub profile_id: Uuid,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = authenticate(req).and_then(|user| {
            if user.is_admin {
                Ok(AdminUser {
                    profile_id: user.profile_id,
                })
            } else {
                Err(create_api_error(ApiResponse::forbidden(
                    "NOT_ADMIN",
                    "Administrator access required",
                )))
            }
        });

        ready(result)
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
