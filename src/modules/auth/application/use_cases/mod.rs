pub mod login;
pub mod logout;
pub mod oauth_login;
pub mod refresh_token;
pub mod session;

use crate::modules::auth::application::domain::entities::{IssuedTokens, Profile};
use crate::modules::auth::application::ports::outgoing::{TokenError, TokenProvider};

/// Access + refresh pair for a profile that already passed every check.
pub(crate) fn issue_tokens(
    tokens: &dyn TokenProvider,
    profile: &Profile,
) -> Result<IssuedTokens, TokenError> {
    Ok(IssuedTokens {
        access_token: tokens.generate_access_token(profile.id, profile.is_admin)?,
        refresh_token: tokens.generate_refresh_token(profile.id, profile.is_admin)?,
        profile: profile.into(),
    })
}
