use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A row of `profiles`. Only admin profiles can sign in.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    /// `None` for profiles that only sign in through an OAuth provider.
    pub password_hash: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// What the client learns about the signed-in profile.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SessionProfile {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub is_admin: bool,
}

impl From<&Profile> for SessionProfile {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            email: profile.email.clone(),
            display_name: profile.display_name.clone(),
            is_admin: profile.is_admin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub profile: SessionProfile,
}
