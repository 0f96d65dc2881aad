pub mod oauth_client;
pub mod password_hasher;
pub mod profile_query;
pub mod token_blacklist;
pub mod token_provider;

pub use oauth_client::{OAuthClient, OAuthError};
pub use password_hasher::{HashError, PasswordHasher};
pub use profile_query::{ProfileQuery, ProfileQueryError};
pub use token_blacklist::{TokenBlacklist, TokenBlacklistError};
pub use token_provider::{TokenClaims, TokenError, TokenProvider, TokenType};
