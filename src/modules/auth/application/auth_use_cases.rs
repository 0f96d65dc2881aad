use std::sync::Arc;

use super::use_cases::{
    login::ILoginUseCase, logout::ILogoutUseCase, oauth_login::IOAuthLoginUseCase,
    refresh_token::IRefreshTokenUseCase, session::ISessionUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginUseCase>,
    pub refresh: Arc<dyn IRefreshTokenUseCase>,
    pub logout: Arc<dyn ILogoutUseCase>,
    pub session: Arc<dyn ISessionUseCase>,
    pub oauth: Arc<dyn IOAuthLoginUseCase>,
}
